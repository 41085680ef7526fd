//! Article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier
    pub id: i64,
    /// Article title
    pub title: String,
    /// Article body
    pub content: String,
    /// Free-text tags
    pub tags: String,
    /// Publication timestamp
    pub published_date: DateTime<Utc>,
    /// Owning author
    pub author_id: i64,
}

/// Input for creating or replacing an article
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub tags: String,
}
