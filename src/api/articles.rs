//! Article API endpoints
//!
//! - GET /articles - List all articles (public)
//! - POST /articles - Create an article (authenticated)
//! - GET /articles/{id} - Get one article (public)
//! - PUT /articles/{id} - Replace an owned article (authenticated)
//! - DELETE /articles/{id} - Delete an owned article (authenticated)
//!
//! Mutations are ownership-scoped: another user's article is reported as
//! not found, never as forbidden.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::auth::{MessageResponse, UserResponse};
use crate::api::middleware::{ApiError, AppState, AuthenticatedUser};
use crate::models::{Article, NewArticle};

/// Request body for creating or replacing an article
#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

impl From<ArticleRequest> for NewArticle {
    fn from(body: ArticleRequest) -> Self {
        Self {
            title: body.title,
            content: body.content,
            tags: body.tags,
        }
    }
}

/// Response for a single article with nested author summary
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub published_date: String,
    pub author: UserResponse,
}

impl ArticleResponse {
    fn new(article: Article, author: UserResponse) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            tags: article.tags,
            published_date: article.published_date.to_rfc3339(),
            author,
        }
    }
}

/// Resolve the author summary for an article
async fn author_summary(state: &AppState, author_id: i64) -> Result<UserResponse, ApiError> {
    let user = state
        .user_repo
        .get_by_id(author_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load author: {:#}", e);
            ApiError::internal_error("Internal server error")
        })?
        .ok_or_else(|| ApiError::internal_error("Article author missing"))?;

    Ok(user.into())
}

/// GET /articles - List all articles
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>, ApiError> {
    let articles = state.article_service.list().await?;

    let mut responses = Vec::with_capacity(articles.len());
    for article in articles {
        let author = author_summary(&state, article.author_id).await?;
        responses.push(ArticleResponse::new(article, author));
    }

    Ok(Json(responses))
}

/// POST /articles - Create an article owned by the authenticated user
pub async fn create_article(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(body): Json<ArticleRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state.article_service.create(user.id, body.into()).await?;

    Ok(Json(ArticleResponse::new(article, user.into())))
}

/// GET /articles/{id} - Get one article
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state.article_service.get(id).await?;
    let author = author_summary(&state, article.author_id).await?;

    Ok(Json(ArticleResponse::new(article, author)))
}

/// PUT /articles/{id} - Replace an article owned by the authenticated user
pub async fn update_article(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(body): Json<ArticleRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state
        .article_service
        .update(id, user.id, body.into())
        .await?;

    Ok(Json(ArticleResponse::new(article, user.into())))
}

/// DELETE /articles/{id} - Delete an article owned by the authenticated user
pub async fn delete_article(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.article_service.delete(id, user.id).await?;

    Ok(Json(MessageResponse {
        message: "Article deleted successfully".to_string(),
    }))
}
