//! Bearer token model
//!
//! Tokens are opaque keys with no expiry. Each user holds at most one;
//! login reuses the existing key if one has already been issued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque bearer token tied to a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Opaque token key presented in the Authorization header
    pub key: String,
    /// Owning user
    pub user_id: i64,
    /// Issue timestamp
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Generate a fresh token for a user
    pub fn generate(user_id: i64) -> Self {
        Self {
            key: Uuid::new_v4().simple().to_string(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
