//! Authentication service
//!
//! Implements account lifecycle and token authentication:
//! - Signup with duplicate-username rejection
//! - Login with get-or-create token semantics (repeat logins return the
//!   same key)
//! - Password reset by username
//! - Resolving a bearer token key to its user
//!
//! Unknown usernames and wrong passwords produce the same login error so
//! the response does not reveal which accounts exist.

use crate::db::repositories::{TokenRepository, UserRepository};
use crate::models::{Token, User};
use crate::services::password::{hash_password, verify_password};
use anyhow::Context;
use std::sync::Arc;

/// Error types for authentication operations
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// Username is already taken
    #[error("Username already exists")]
    UsernameTaken,

    /// Login credentials did not match any account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account for the given username
    #[error("User not found")]
    UserNotFound,

    /// Bearer token did not resolve to a user
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Validation error (invalid input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Signup input
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Authentication service
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn TokenRepository>,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(user_repo: Arc<dyn UserRepository>, token_repo: Arc<dyn TokenRepository>) -> Self {
        Self {
            user_repo,
            token_repo,
        }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// - `ValidationError` if username or password is empty
    /// - `UsernameTaken` if the username is already registered
    /// - `InternalError` for database errors
    pub async fn signup(&self, input: SignupInput) -> Result<User, AuthServiceError> {
        if input.username.trim().is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }
        if input.password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Password cannot be empty".to_string(),
            ));
        }

        // Only the username is checked for uniqueness; emails may repeat
        if self
            .user_repo
            .get_by_username(&input.username)
            .await
            .context("Failed to check username")?
            .is_some()
        {
            return Err(AuthServiceError::UsernameTaken);
        }

        let password_hash = hash_password(&input.password).context("Failed to hash password")?;

        let user = User::new(input.username, input.email, password_hash);

        let created = self
            .user_repo
            .create(&user)
            .await
            .context("Failed to create user")?;

        tracing::info!(user_id = created.id, username = %created.username, "User registered");

        Ok(created)
    }

    /// Authenticate a username/password pair and return the user's token
    ///
    /// The token is issued on first login and reused afterwards, so
    /// repeated logins are idempotent.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown username or a wrong password
    /// - `InternalError` for database errors
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, AuthServiceError> {
        let user = self
            .user_repo
            .get_by_username(username)
            .await
            .context("Failed to look up user")?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let valid = verify_password(password, &user.password_hash)
            .context("Failed to verify password")?;

        if !valid {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self
            .token_repo
            .get_or_create(user.id)
            .await
            .context("Failed to issue token")?;

        tracing::debug!(user_id = user.id, "Login succeeded");

        Ok(token)
    }

    /// Replace the password for an existing account
    ///
    /// The current password is not required; the reset is keyed by
    /// username alone, matching the upstream contract.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the username is not registered
    /// - `ValidationError` if the new password is empty
    /// - `InternalError` for database errors
    pub async fn reset_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<(), AuthServiceError> {
        if new_password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Password cannot be empty".to_string(),
            ));
        }

        let user = self
            .user_repo
            .get_by_username(username)
            .await
            .context("Failed to look up user")?
            .ok_or(AuthServiceError::UserNotFound)?;

        let password_hash = hash_password(new_password).context("Failed to hash password")?;

        self.user_repo
            .update_password(user.id, &password_hash)
            .await
            .context("Failed to update password")?;

        tracing::info!(user_id = user.id, "Password reset");

        Ok(())
    }

    /// Resolve a bearer token key to its user
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the key is unknown or the user record is gone
    /// - `InternalError` for database errors
    pub async fn authenticate_token(&self, key: &str) -> Result<User, AuthServiceError> {
        let token = self
            .token_repo
            .get_by_key(key)
            .await
            .context("Failed to look up token")?
            .ok_or(AuthServiceError::InvalidToken)?;

        let user = self
            .user_repo
            .get_by_id(token.user_id)
            .await
            .context("Failed to look up token user")?
            .ok_or(AuthServiceError::InvalidToken)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::{SqlxTokenRepository, SqlxUserRepository};
    use crate::db::{create_test_pool, migrations};

    async fn setup() -> AuthService {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        AuthService::new(
            SqlxUserRepository::boxed(pool.clone()),
            SqlxTokenRepository::boxed(pool),
        )
    }

    fn signup_input(username: &str) -> SignupInput {
        SignupInput {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_creates_user() {
        let service = setup().await;

        let user = service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");

        assert!(user.id > 0);
        assert_eq!(user.username, "alice");
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_signup_duplicate_username_rejected() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("First signup should succeed");

        let result = service.signup(signup_input("alice")).await;

        assert!(matches!(result, Err(AuthServiceError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_allowed() {
        let service = setup().await;
        service
            .signup(SignupInput {
                username: "alice".to_string(),
                email: "shared@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .expect("First signup should succeed");

        let result = service
            .signup(SignupInput {
                username: "bob".to_string(),
                email: "shared@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert!(result.is_ok(), "Email uniqueness is not enforced");
    }

    #[tokio::test]
    async fn test_signup_empty_username_rejected() {
        let service = setup().await;

        let result = service
            .signup(SignupInput {
                username: "  ".to_string(),
                email: "x@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");

        let token = service
            .login("alice", "secret123")
            .await
            .expect("Login should succeed");

        assert!(!token.key.is_empty());
    }

    #[tokio::test]
    async fn test_login_is_idempotent() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");

        let first = service
            .login("alice", "secret123")
            .await
            .expect("First login should succeed");
        let second = service
            .login("alice", "secret123")
            .await
            .expect("Second login should succeed");

        assert_eq!(first.key, second.key);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");

        let result = service.login("alice", "wrong").await;

        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_same_error() {
        let service = setup().await;

        let result = service.login("ghost", "secret123").await;

        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_reset_password() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");

        service
            .reset_password("alice", "newsecret")
            .await
            .expect("Reset should succeed");

        // Old password no longer works, new one does
        assert!(matches!(
            service.login("alice", "secret123").await,
            Err(AuthServiceError::InvalidCredentials)
        ));
        service
            .login("alice", "newsecret")
            .await
            .expect("Login with new password should succeed");
    }

    #[tokio::test]
    async fn test_reset_password_unknown_user() {
        let service = setup().await;

        let result = service.reset_password("ghost", "newsecret").await;

        assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_authenticate_token() {
        let service = setup().await;
        service
            .signup(signup_input("alice"))
            .await
            .expect("Signup should succeed");
        let token = service
            .login("alice", "secret123")
            .await
            .expect("Login should succeed");

        let user = service
            .authenticate_token(&token.key)
            .await
            .expect("Token should authenticate");

        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let service = setup().await;

        let result = service.authenticate_token("bogus").await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));
    }
}
