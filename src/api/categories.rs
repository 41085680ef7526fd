//! Category API endpoints
//!
//! - POST /categories - Create a category
//! - GET /categories - List all categories
//!
//! Whether category creation requires a token is a deployment decision
//! (`auth.protect_category_writes`); the handler itself is policy-free.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{ApiError, AppState};
use crate::models::Category;

/// Request body for creating a category
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Response for a single category
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// POST /categories - Create a category
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.category_service.create(&body.name).await?;

    Ok(Json(category.into()))
}

/// GET /categories - List all categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.category_service.list().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
