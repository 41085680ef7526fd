//! Category service

use crate::db::repositories::CategoryRepository;
use crate::models::Category;
use anyhow::Context;
use std::sync::Arc;

/// Error types for category operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    /// Validation error (invalid input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Category service
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Create a new category service
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Create a category
    pub async fn create(&self, name: &str) -> Result<Category, CategoryServiceError> {
        if name.trim().is_empty() {
            return Err(CategoryServiceError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }

        Ok(self
            .repo
            .create(name)
            .await
            .context("Failed to create category")?)
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>, CategoryServiceError> {
        Ok(self.repo.list().await.context("Failed to list categories")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::SqlxCategoryRepository;
    use crate::db::{create_test_pool, migrations};

    async fn setup() -> CategoryService {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        CategoryService::new(SqlxCategoryRepository::boxed(pool))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = setup().await;

        let created = service.create("Tech").await.expect("Create should succeed");
        assert_eq!(created.name, "Tech");

        let all = service.list().await.expect("List should succeed");
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_create_empty_name_rejected() {
        let service = setup().await;

        let result = service.create("  ").await;

        assert!(matches!(
            result,
            Err(CategoryServiceError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let service = setup().await;

        let all = service.list().await.expect("List should succeed");

        assert!(all.is_empty());
    }
}
