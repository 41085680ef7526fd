//! FAQ repository
//!
//! Mirrors the article repository: mutations are scoped by (id, creator)
//! in a single query.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::{Faq, NewFaq};

/// FAQ repository trait
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Create a new FAQ entry owned by the given user
    async fn create(&self, created_by: i64, input: &NewFaq) -> Result<Faq>;

    /// Get a FAQ entry by ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Faq>>;

    /// List all FAQ entries
    async fn list(&self) -> Result<Vec<Faq>>;

    /// Update a FAQ entry scoped by (id, creator); None when no such row
    async fn update_owned(&self, id: i64, created_by: i64, input: &NewFaq)
        -> Result<Option<Faq>>;

    /// Delete a FAQ entry scoped by (id, creator); false when no such row
    async fn delete_owned(&self, id: i64, created_by: i64) -> Result<bool>;
}

/// SQLx-based FAQ repository implementation
pub struct SqlxFaqRepository {
    pool: SqlitePool,
}

impl SqlxFaqRepository {
    /// Create a new SQLx FAQ repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn FaqRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl FaqRepository for SqlxFaqRepository {
    async fn create(&self, created_by: i64, input: &NewFaq) -> Result<Faq> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO faqs (question, answer, created_by, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.question)
        .bind(&input.answer)
        .bind(created_by)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to create FAQ")?;

        Ok(Faq {
            id: result.last_insert_rowid(),
            question: input.question.clone(),
            answer: input.answer.clone(),
            created_by,
            created_at: now,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Faq>> {
        let row = sqlx::query(
            r#"
            SELECT id, question, answer, created_by, created_at
            FROM faqs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to get FAQ by ID")?;

        match row {
            Some(row) => Ok(Some(row_to_faq(&row))),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Faq>> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, created_by, created_at
            FROM faqs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list FAQs")?;

        Ok(rows.iter().map(row_to_faq).collect())
    }

    async fn update_owned(
        &self,
        id: i64,
        created_by: i64,
        input: &NewFaq,
    ) -> Result<Option<Faq>> {
        let result = sqlx::query(
            r#"
            UPDATE faqs
            SET question = ?, answer = ?
            WHERE id = ? AND created_by = ?
            "#,
        )
        .bind(&input.question)
        .bind(&input.answer)
        .bind(id)
        .bind(created_by)
        .execute(&self.pool)
        .await
        .context("Failed to update FAQ")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    async fn delete_owned(&self, id: i64, created_by: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = ? AND created_by = ?")
            .bind(id)
            .bind(created_by)
            .execute(&self.pool)
            .await
            .context("Failed to delete FAQ")?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_faq(row: &sqlx::sqlite::SqliteRow) -> Faq {
    Faq {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
    }
}
