//! Comment API endpoints
//!
//! - POST /articles/{id}/comments - Comment on an article (authenticated)
//! - GET /articles/{id}/comments - List an article's comments (public)
//!
//! Both operations 404 when the article does not exist.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::auth::UserResponse;
use crate::api::middleware::{ApiError, AppState, AuthenticatedUser};
use crate::models::Comment;

/// Request body for creating a comment
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Response for a single comment with nested user summary
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub article_id: i64,
    pub user: UserResponse,
    pub content: String,
    pub created_at: String,
}

impl CommentResponse {
    fn new(comment: Comment, user: UserResponse) -> Self {
        Self {
            id: comment.id,
            article_id: comment.article_id,
            user,
            content: comment.content,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

async fn commenter_summary(state: &AppState, user_id: i64) -> Result<UserResponse, ApiError> {
    let user = state
        .user_repo
        .get_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load commenter: {:#}", e);
            ApiError::internal_error("Internal server error")
        })?
        .ok_or_else(|| ApiError::internal_error("Comment user missing"))?;

    Ok(user.into())
}

/// POST /articles/{id}/comments - Comment on an article
pub async fn create_comment(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(article_id): Path<i64>,
    Json(body): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let comment = state
        .comment_service
        .create(article_id, user.id, &body.content)
        .await?;

    Ok(Json(CommentResponse::new(comment, user.into())))
}

/// GET /articles/{id}/comments - List an article's comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = state.comment_service.list(article_id).await?;

    let mut responses = Vec::with_capacity(comments.len());
    for comment in comments {
        let user = commenter_summary(&state, comment.user_id).await?;
        responses.push(CommentResponse::new(comment, user));
    }

    Ok(Json(responses))
}
