//! Comment service
//!
//! Every operation verifies the target article first, so commenting on or
//! listing a missing article yields a clean not-found instead of an orphan
//! row or a server fault.

use crate::db::repositories::{ArticleRepository, CommentRepository};
use crate::models::Comment;
use anyhow::Context;
use std::sync::Arc;

/// Error types for comment operations
#[derive(Debug, thiserror::Error)]
pub enum CommentServiceError {
    /// Target article does not exist
    #[error("Article not found")]
    ArticleNotFound,

    /// Validation error (invalid input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Comment service
pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleRepository>,
}

impl CommentService {
    /// Create a new comment service
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }

    /// Add a comment to an article
    pub async fn create(
        &self,
        article_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, CommentServiceError> {
        if content.trim().is_empty() {
            return Err(CommentServiceError::ValidationError(
                "Content cannot be empty".to_string(),
            ));
        }

        self.ensure_article_exists(article_id).await?;

        Ok(self
            .comment_repo
            .create(article_id, user_id, content)
            .await
            .context("Failed to create comment")?)
    }

    /// List an article's comments in insertion order
    pub async fn list(&self, article_id: i64) -> Result<Vec<Comment>, CommentServiceError> {
        self.ensure_article_exists(article_id).await?;

        Ok(self
            .comment_repo
            .list_by_article(article_id)
            .await
            .context("Failed to list comments")?)
    }

    async fn ensure_article_exists(&self, article_id: i64) -> Result<(), CommentServiceError> {
        self.article_repo
            .get_by_id(article_id)
            .await
            .context("Failed to look up article")?
            .ok_or(CommentServiceError::ArticleNotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{
        ArticleRepository, SqlxArticleRepository, SqlxCommentRepository, SqlxUserRepository,
        UserRepository,
    };
    use crate::db::{create_test_pool, migrations};
    use crate::models::{NewArticle, User};
    use crate::services::password::hash_password;

    async fn setup() -> (CommentService, i64, i64) {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let users = SqlxUserRepository::new(pool.clone());
        let user = users
            .create(&User::new(
                "alice".to_string(),
                "alice@example.com".to_string(),
                hash_password("pw").expect("Failed to hash password"),
            ))
            .await
            .expect("Failed to create user");

        let article_repo = SqlxArticleRepository::new(pool.clone());
        let article = article_repo
            .create(
                user.id,
                &NewArticle {
                    title: "Post".to_string(),
                    content: "Body".to_string(),
                    tags: String::new(),
                },
            )
            .await
            .expect("Failed to create article");

        let service = CommentService::new(
            SqlxCommentRepository::boxed(pool.clone()),
            SqlxArticleRepository::boxed(pool),
        );
        (service, article.id, user.id)
    }

    #[tokio::test]
    async fn test_create_comment() {
        let (service, article_id, user_id) = setup().await;

        let comment = service
            .create(article_id, user_id, "Nice post")
            .await
            .expect("Create should succeed");

        assert_eq!(comment.content, "Nice post");
    }

    #[tokio::test]
    async fn test_create_on_missing_article() {
        let (service, _article_id, user_id) = setup().await;

        let result = service.create(999, user_id, "Hello").await;

        assert!(matches!(result, Err(CommentServiceError::ArticleNotFound)));
    }

    #[tokio::test]
    async fn test_list_on_missing_article() {
        let (service, _article_id, _user_id) = setup().await;

        let result = service.list(999).await;

        assert!(matches!(result, Err(CommentServiceError::ArticleNotFound)));
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let (service, article_id, user_id) = setup().await;
        for content in ["a", "b", "c"] {
            service
                .create(article_id, user_id, content)
                .await
                .expect("Create should succeed");
        }

        let comments = service.list(article_id).await.expect("List should succeed");

        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let (service, article_id, user_id) = setup().await;

        let result = service.create(article_id, user_id, "   ").await;

        assert!(matches!(
            result,
            Err(CommentServiceError::ValidationError(_))
        ));
    }
}
