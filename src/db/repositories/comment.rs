//! Comment repository
//!
//! Comments hang off articles; listing returns insertion order.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::Comment;

/// Comment repository trait
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment on an article
    async fn create(&self, article_id: i64, user_id: i64, content: &str) -> Result<Comment>;

    /// List all comments on an article in insertion order
    async fn list_by_article(&self, article_id: i64) -> Result<Vec<Comment>>;
}

/// SQLx-based comment repository implementation
pub struct SqlxCommentRepository {
    pool: SqlitePool,
}

impl SqlxCommentRepository {
    /// Create a new SQLx comment repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn CommentRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(&self, article_id: i64, user_id: i64, content: &str) -> Result<Comment> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO comments (article_id, user_id, content, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(article_id)
        .bind(user_id)
        .bind(content)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to create comment")?;

        Ok(Comment {
            id: result.last_insert_rowid(),
            article_id,
            user_id,
            content: content.to_string(),
            created_at: now,
        })
    }

    async fn list_by_article(&self, article_id: i64) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, article_id, user_id, content, created_at
            FROM comments
            WHERE article_id = ?
            ORDER BY id
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list comments")?;

        Ok(rows
            .iter()
            .map(|row| Comment {
                id: row.get("id"),
                article_id: row.get("article_id"),
                user_id: row.get("user_id"),
                content: row.get("content"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}
