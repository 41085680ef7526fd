//! FAQ service
//!
//! Mirrors the article service with `created_by` ownership.

use crate::db::repositories::FaqRepository;
use crate::models::{Faq, NewFaq};
use anyhow::Context;
use std::sync::Arc;

/// Error types for FAQ operations
#[derive(Debug, thiserror::Error)]
pub enum FaqServiceError {
    /// FAQ not found (or not owned by the acting user)
    #[error("FAQ not found")]
    NotFound,

    /// Validation error (invalid input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// FAQ service
pub struct FaqService {
    repo: Arc<dyn FaqRepository>,
}

impl FaqService {
    /// Create a new FAQ service
    pub fn new(repo: Arc<dyn FaqRepository>) -> Self {
        Self { repo }
    }

    /// Create a FAQ entry owned by the given user
    pub async fn create(&self, created_by: i64, input: NewFaq) -> Result<Faq, FaqServiceError> {
        validate_input(&input)?;

        Ok(self
            .repo
            .create(created_by, &input)
            .await
            .context("Failed to create FAQ")?)
    }

    /// Get a FAQ entry by ID
    pub async fn get(&self, id: i64) -> Result<Faq, FaqServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get FAQ")?
            .ok_or(FaqServiceError::NotFound)
    }

    /// List all FAQ entries
    pub async fn list(&self) -> Result<Vec<Faq>, FaqServiceError> {
        Ok(self.repo.list().await.context("Failed to list FAQs")?)
    }

    /// Replace a FAQ entry owned by the acting user
    pub async fn update(
        &self,
        id: i64,
        created_by: i64,
        input: NewFaq,
    ) -> Result<Faq, FaqServiceError> {
        validate_input(&input)?;

        self.repo
            .update_owned(id, created_by, &input)
            .await
            .context("Failed to update FAQ")?
            .ok_or(FaqServiceError::NotFound)
    }

    /// Delete a FAQ entry owned by the acting user
    pub async fn delete(&self, id: i64, created_by: i64) -> Result<(), FaqServiceError> {
        let deleted = self
            .repo
            .delete_owned(id, created_by)
            .await
            .context("Failed to delete FAQ")?;

        if !deleted {
            return Err(FaqServiceError::NotFound);
        }

        Ok(())
    }
}

fn validate_input(input: &NewFaq) -> Result<(), FaqServiceError> {
    if input.question.trim().is_empty() {
        return Err(FaqServiceError::ValidationError(
            "Question cannot be empty".to_string(),
        ));
    }
    if input.answer.trim().is_empty() {
        return Err(FaqServiceError::ValidationError(
            "Answer cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{SqlxFaqRepository, SqlxUserRepository, UserRepository};
    use crate::db::{create_test_pool, migrations};
    use crate::models::User;
    use crate::services::password::hash_password;

    async fn setup() -> (FaqService, i64, i64) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let users = SqlxUserRepository::new(pool.clone());
        let alice = users
            .create(&User::new(
                "alice".to_string(),
                "alice@example.com".to_string(),
                hash_password("pw").expect("Failed to hash password"),
            ))
            .await
            .expect("Failed to create user");
        let bob = users
            .create(&User::new(
                "bob".to_string(),
                "bob@example.com".to_string(),
                hash_password("pw").expect("Failed to hash password"),
            ))
            .await
            .expect("Failed to create user");

        let service = FaqService::new(SqlxFaqRepository::boxed(pool));
        (service, alice.id, bob.id)
    }

    fn sample() -> NewFaq {
        NewFaq {
            question: "Q?".to_string(),
            answer: "A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (service, alice, _bob) = setup().await;

        let created = service
            .create(alice, sample())
            .await
            .expect("Create should succeed");

        let found = service.get(created.id).await.expect("Get should succeed");
        assert_eq!(found.question, "Q?");
        assert_eq!(found.created_by, alice);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _alice, _bob) = setup().await;

        let result = service.get(7).await;

        assert!(matches!(result, Err(FaqServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_not_found() {
        let (service, alice, bob) = setup().await;
        let created = service
            .create(alice, sample())
            .await
            .expect("Create should succeed");

        let result = service.update(created.id, bob, sample()).await;

        assert!(matches!(result, Err(FaqServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_not_found() {
        let (service, alice, bob) = setup().await;
        let created = service
            .create(alice, sample())
            .await
            .expect("Create should succeed");

        let result = service.delete(created.id, bob).await;

        assert!(matches!(result, Err(FaqServiceError::NotFound)));
        service.get(created.id).await.expect("FAQ should remain");
    }

    #[tokio::test]
    async fn test_owner_can_update_and_delete() {
        let (service, alice, _bob) = setup().await;
        let created = service
            .create(alice, sample())
            .await
            .expect("Create should succeed");

        let updated = service
            .update(
                created.id,
                alice,
                NewFaq {
                    question: "New?".to_string(),
                    answer: "Yes".to_string(),
                },
            )
            .await
            .expect("Update should succeed");
        assert_eq!(updated.question, "New?");

        service
            .delete(created.id, alice)
            .await
            .expect("Delete should succeed");
        assert!(matches!(
            service.get(created.id).await,
            Err(FaqServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_empty_question_rejected() {
        let (service, alice, _bob) = setup().await;

        let result = service
            .create(
                alice,
                NewFaq {
                    question: " ".to_string(),
                    answer: "A".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(FaqServiceError::ValidationError(_))));
    }
}
