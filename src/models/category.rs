//! Category model

use serde::{Deserialize, Serialize};

/// A named article category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: i64,
    /// Category name
    pub name: String,
}
