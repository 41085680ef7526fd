//! FAQ entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A frequently-asked-question entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    /// Unique identifier
    pub id: i64,
    /// The question text
    pub question: String,
    /// The answer text
    pub answer: String,
    /// User who created the entry
    pub created_by: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input for creating or replacing a FAQ entry
#[derive(Debug, Clone)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}
