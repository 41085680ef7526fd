//! Article service
//!
//! Business logic for articles. Mutations are scoped to the acting user;
//! an article owned by someone else is reported as not found.

use crate::db::repositories::ArticleRepository;
use crate::models::{Article, NewArticle};
use anyhow::Context;
use std::sync::Arc;

/// Error types for article operations
#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    /// Article not found (or not owned by the acting user)
    #[error("Article not found")]
    NotFound,

    /// Validation error (invalid input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Article service
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    /// Create a new article service
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    /// Create an article owned by the given author
    pub async fn create(
        &self,
        author_id: i64,
        input: NewArticle,
    ) -> Result<Article, ArticleServiceError> {
        validate_input(&input)?;

        let article = self
            .repo
            .create(author_id, &input)
            .await
            .context("Failed to create article")?;

        tracing::debug!(article_id = article.id, author_id, "Article created");

        Ok(article)
    }

    /// Get an article by ID
    pub async fn get(&self, id: i64) -> Result<Article, ArticleServiceError> {
        self.repo
            .get_by_id(id)
            .await
            .context("Failed to get article")?
            .ok_or(ArticleServiceError::NotFound)
    }

    /// List all articles
    pub async fn list(&self) -> Result<Vec<Article>, ArticleServiceError> {
        Ok(self.repo.list().await.context("Failed to list articles")?)
    }

    /// Replace an article owned by the acting user
    pub async fn update(
        &self,
        id: i64,
        author_id: i64,
        input: NewArticle,
    ) -> Result<Article, ArticleServiceError> {
        validate_input(&input)?;

        self.repo
            .update_owned(id, author_id, &input)
            .await
            .context("Failed to update article")?
            .ok_or(ArticleServiceError::NotFound)
    }

    /// Delete an article owned by the acting user
    pub async fn delete(&self, id: i64, author_id: i64) -> Result<(), ArticleServiceError> {
        let deleted = self
            .repo
            .delete_owned(id, author_id)
            .await
            .context("Failed to delete article")?;

        if !deleted {
            return Err(ArticleServiceError::NotFound);
        }

        tracing::debug!(article_id = id, author_id, "Article deleted");

        Ok(())
    }
}

fn validate_input(input: &NewArticle) -> Result<(), ArticleServiceError> {
    if input.title.trim().is_empty() {
        return Err(ArticleServiceError::ValidationError(
            "Title cannot be empty".to_string(),
        ));
    }
    if input.content.trim().is_empty() {
        return Err(ArticleServiceError::ValidationError(
            "Content cannot be empty".to_string(),
        ));
    }
    Ok(())
}
