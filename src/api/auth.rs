//! Authentication API endpoints
//!
//! - POST /signup - Create an account
//! - POST /login - Exchange credentials for a bearer token (form-encoded)
//! - POST /password_reset - Replace an account's password

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{ApiError, AppState};
use crate::services::auth::SignupInput;

/// Request body for signup
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form body for login (OAuth2 password flow shape)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Request body for password reset
#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub username: String,
    pub new_password: String,
}

/// Response for successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Confirmation message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Nested user summary used across resource responses
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<crate::models::User> for UserResponse {
    fn from(user: crate::models::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// POST /signup - Create an account
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth_service
        .signup(SignupInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "User created successfully".to_string(),
    }))
}

/// POST /login - Exchange credentials for a bearer token
///
/// Accepts form-encoded credentials. Repeat logins return the same token.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth_service.login(&body.username, &body.password).await?;

    Ok(Json(TokenResponse {
        access_token: token.key,
        token_type: "bearer".to_string(),
    }))
}

/// POST /password_reset - Replace an account's password
pub async fn password_reset(
    State(state): State<AppState>,
    Json(body): Json<PasswordResetRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth_service
        .reset_password(&body.username, &body.new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}
