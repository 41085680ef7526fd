//! Token repository
//!
//! Database operations for bearer tokens. A user holds at most one token;
//! `get_or_create` returns the existing key on repeat logins.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::models::Token;

/// Token repository trait
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Get the user's token, creating one if none has been issued yet
    async fn get_or_create(&self, user_id: i64) -> Result<Token>;

    /// Look up a token by its opaque key
    async fn get_by_key(&self, key: &str) -> Result<Option<Token>>;
}

/// SQLx-based token repository implementation
pub struct SqlxTokenRepository {
    pool: SqlitePool,
}

impl SqlxTokenRepository {
    /// Create a new SQLx token repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: SqlitePool) -> Arc<dyn TokenRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl TokenRepository for SqlxTokenRepository {
    async fn get_or_create(&self, user_id: i64) -> Result<Token> {
        let existing = sqlx::query(
            "SELECT key, user_id, created_at FROM tokens WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up token by user")?;

        if let Some(row) = existing {
            return Ok(row_to_token(&row));
        }

        let token = Token::generate(user_id);

        sqlx::query("INSERT INTO tokens (key, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&token.key)
            .bind(token.user_id)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .context("Failed to create token")?;

        Ok(token)
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<Token>> {
        let row = sqlx::query("SELECT key, user_id, created_at FROM tokens WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to look up token by key")?;

        match row {
            Some(row) => Ok(Some(row_to_token(&row))),
            None => Ok(None),
        }
    }
}

fn row_to_token(row: &sqlx::sqlite::SqliteRow) -> Token {
    Token {
        key: row.get("key"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
    }
}
