//! FAQ API endpoints
//!
//! Structurally identical to articles, with `created_by` ownership:
//! - GET /faqs - List all entries (public)
//! - POST /faqs - Create an entry (authenticated)
//! - GET /faqs/{id} - Get one entry (public)
//! - PUT /faqs/{id} - Replace an owned entry (authenticated)
//! - DELETE /faqs/{id} - Delete an owned entry (authenticated)

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::auth::{MessageResponse, UserResponse};
use crate::api::middleware::{ApiError, AppState, AuthenticatedUser};
use crate::models::{Faq, NewFaq};

/// Request body for creating or replacing a FAQ entry
#[derive(Debug, Deserialize)]
pub struct FaqRequest {
    pub question: String,
    pub answer: String,
}

impl From<FaqRequest> for NewFaq {
    fn from(body: FaqRequest) -> Self {
        Self {
            question: body.question,
            answer: body.answer,
        }
    }
}

/// Response for a single FAQ entry with nested creator summary
#[derive(Debug, Serialize)]
pub struct FaqResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_by: UserResponse,
    pub created_at: String,
}

impl FaqResponse {
    fn new(faq: Faq, created_by: UserResponse) -> Self {
        Self {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
            created_by,
            created_at: faq.created_at.to_rfc3339(),
        }
    }
}

async fn creator_summary(state: &AppState, user_id: i64) -> Result<UserResponse, ApiError> {
    let user = state
        .user_repo
        .get_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load FAQ creator: {:#}", e);
            ApiError::internal_error("Internal server error")
        })?
        .ok_or_else(|| ApiError::internal_error("FAQ creator missing"))?;

    Ok(user.into())
}

/// GET /faqs - List all FAQ entries
pub async fn list_faqs(State(state): State<AppState>) -> Result<Json<Vec<FaqResponse>>, ApiError> {
    let faqs = state.faq_service.list().await?;

    let mut responses = Vec::with_capacity(faqs.len());
    for faq in faqs {
        let creator = creator_summary(&state, faq.created_by).await?;
        responses.push(FaqResponse::new(faq, creator));
    }

    Ok(Json(responses))
}

/// POST /faqs - Create a FAQ entry owned by the authenticated user
pub async fn create_faq(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<FaqRequest>,
) -> Result<Json<FaqResponse>, ApiError> {
    let faq = state.faq_service.create(user.id, body.into()).await?;

    Ok(Json(FaqResponse::new(faq, user.into())))
}

/// GET /faqs/{id} - Get one FAQ entry
pub async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FaqResponse>, ApiError> {
    let faq = state.faq_service.get(id).await?;
    let creator = creator_summary(&state, faq.created_by).await?;

    Ok(Json(FaqResponse::new(faq, creator)))
}

/// PUT /faqs/{id} - Replace a FAQ entry owned by the authenticated user
pub async fn update_faq(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(body): Json<FaqRequest>,
) -> Result<Json<FaqResponse>, ApiError> {
    let faq = state.faq_service.update(id, user.id, body.into()).await?;

    Ok(Json(FaqResponse::new(faq, user.into())))
}

/// DELETE /faqs/{id} - Delete a FAQ entry owned by the authenticated user
pub async fn delete_faq(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.faq_service.delete(id, user.id).await?;

    Ok(Json(MessageResponse {
        message: "FAQ deleted successfully".to_string(),
    }))
}
