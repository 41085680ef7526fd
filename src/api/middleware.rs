//! API middleware
//!
//! Shared application state, the JSON error envelope, and bearer-token
//! authentication.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::db::repositories::UserRepository;
use crate::models::User;
use crate::services::{
    ArticleService, ArticleServiceError, AuthService, AuthServiceError, CategoryService,
    CategoryServiceError, CommentService, CommentServiceError, FaqService, FaqServiceError,
};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub user_repo: Arc<dyn UserRepository>,
    pub article_service: Arc<ArticleService>,
    pub category_service: Arc<CategoryService>,
    pub comment_service: Arc<CommentService>,
    pub faq_service: Arc<FaqService>,
    pub auth_config: Arc<AuthConfig>,
}

/// Authenticated user extracted from request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Error response for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new("INVALID_CREDENTIALS", message)
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // CONFLICT and INVALID_CREDENTIALS deliberately map to 400, matching
        // the platform's published API contract.
        let status = match self.error.code.as_str() {
            "UNAUTHORIZED" => StatusCode::UNAUTHORIZED,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            "CONFLICT" => StatusCode::BAD_REQUEST,
            "INVALID_CREDENTIALS" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::UsernameTaken => ApiError::conflict("Username already exists"),
            AuthServiceError::InvalidCredentials => {
                ApiError::invalid_credentials("Invalid credentials")
            }
            AuthServiceError::UserNotFound => ApiError::not_found("User not found"),
            AuthServiceError::InvalidToken => {
                ApiError::unauthorized("Invalid authentication token")
            }
            AuthServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            AuthServiceError::InternalError(e) => {
                tracing::error!("Auth service error: {:#}", e);
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

impl From<ArticleServiceError> for ApiError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::NotFound => ApiError::not_found("Article not found"),
            ArticleServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            ArticleServiceError::InternalError(e) => {
                tracing::error!("Article service error: {:#}", e);
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

impl From<CategoryServiceError> for ApiError {
    fn from(err: CategoryServiceError) -> Self {
        match err {
            CategoryServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            CategoryServiceError::InternalError(e) => {
                tracing::error!("Category service error: {:#}", e);
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

impl From<CommentServiceError> for ApiError {
    fn from(err: CommentServiceError) -> Self {
        match err {
            CommentServiceError::ArticleNotFound => ApiError::not_found("Article not found"),
            CommentServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            CommentServiceError::InternalError(e) => {
                tracing::error!("Comment service error: {:#}", e);
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

impl From<FaqServiceError> for ApiError {
    fn from(err: FaqServiceError) -> Self {
        match err {
            FaqServiceError::NotFound => ApiError::not_found("FAQ not found"),
            FaqServiceError::ValidationError(msg) => ApiError::validation_error(msg),
            FaqServiceError::InternalError(e) => {
                tracing::error!("FAQ service error: {:#}", e);
                ApiError::internal_error("Internal server error")
            }
        }
    }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(request: &Request) -> Option<String> {
    let auth_header = request.headers().get(header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ").map(|t| t.to_string())
}

/// Authentication middleware
///
/// Resolves the bearer token to a user and stores it in request extensions
/// for handlers to extract.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&request)
        .ok_or_else(|| ApiError::unauthorized("Missing authentication token"))?;

    let user = state.auth_service.authenticate_token(&token).await?;

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}
