//! Domain service for account registration and login.
//!
//! Passwords are stored and compared as plaintext.

use serde::Serialize;
use thiserror::Error;

use crate::models::{NewUser, User};

/// Errors specific to authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Public view of an account, safe to return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar: user.avatar,
        }
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UsernameTaken`] or [`AuthError::EmailTaken`] on a
    /// clash and [`AuthError::Validation`] for empty fields.
    async fn register(&self, data: NewUser) -> Result<UserInfo, AuthError>;

    /// Verifies credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown user or a
    /// wrong password; the two cases are not distinguished.
    async fn login(&self, username: &str, password: &str) -> Result<UserInfo, AuthError>;
}
