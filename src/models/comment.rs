//! Comment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier
    pub id: i64,
    /// Article this comment belongs to
    pub article_id: i64,
    /// Commenting user
    pub user_id: i64,
    /// Comment text
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
