//! User account model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Unique username for login
    pub username: String,
    /// Email address
    pub email: String,
    /// Argon2 hashed password (never serialized)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account may authenticate
    pub is_active: bool,
    /// Whether the account has staff privileges
    pub is_staff: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default flags, ready for insertion
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            username,
            email,
            password_hash,
            is_active: true,
            is_staff: false,
            created_at: Utc::now(),
        }
    }
}
