//! User error types.

use finapi_shared::AppError;
use finapi_shared::types::UserId;
use thiserror::Error;

use super::password::PasswordError;
use crate::persistence::StoreError;

/// Errors that can occur during registration, login, and profile lookup.
#[derive(Debug, Error)]
pub enum UserError {
    /// The email is already registered.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Unknown email or wrong password; both map to this one variant.
    #[error("Incorrect email or password")]
    IncorrectEmailOrPassword,

    /// No user with this ID.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Registration input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password hashing failed.
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    /// The user directory failed.
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::IncorrectEmailOrPassword => "INCORRECT_EMAIL_OR_PASSWORD",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Password(_) => "PASSWORD_ERROR",
            Self::Persistence(_) => "PERSISTENCE_FAILURE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::IncorrectEmailOrPassword => 401,
            Self::UserNotFound(_) => 404,
            Self::UserAlreadyExists => 409,
            Self::Password(_) => 500,
            Self::Persistence(_) => 503,
        }
    }

    /// Returns true if the whole call may be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => Self::UserAlreadyExists,
            other => Self::Persistence(other.to_string()),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::UserAlreadyExists => Self::Conflict(message),
            UserError::IncorrectEmailOrPassword => Self::Unauthorized(message),
            UserError::UserNotFound(_) => Self::NotFound(message),
            UserError::InvalidInput(_) => Self::Validation(message),
            UserError::Password(_) => Self::Internal(message),
            UserError::Persistence(_) => Self::Unavailable(message),
        }
    }
}
