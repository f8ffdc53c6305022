//! User service: registration, credential checks, and profile lookup.
//!
//! Token issuance lives at the HTTP edge; this service only answers "who is
//! this" and "are these credentials right".

use std::sync::Arc;

use finapi_shared::auth::CreateUserRequest;
use finapi_shared::types::UserId;
use tracing::{info, warn};
use validator::Validate;

use super::directory::{NewUser, User, UserDirectory};
use super::error::UserError;
use super::password::{hash_password, verify_password};

/// Trims and lower-cases an email for lookup and storage.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registration, authentication, and profile queries over a directory.
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Creates a service over `directory`.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for an empty name, malformed email, or short password
    /// - `UserAlreadyExists` if the normalized email is taken
    /// - `Password` or `Persistence` on infrastructure failure
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserError> {
        let request = CreateUserRequest {
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            password: request.password,
        };
        request
            .validate()
            .map_err(|e| UserError::InvalidInput(e.to_string()))?;

        if self.directory.find_by_email(&request.email).await?.is_some() {
            return Err(UserError::UserAlreadyExists);
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .directory
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Errors
    ///
    /// Returns `IncorrectEmailOrPassword` for an unknown email and for a
    /// wrong password alike.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let Some(user) = self.directory.find_by_email(&normalize_email(email)).await? else {
            warn!("login rejected: unknown email");
            return Err(UserError::IncorrectEmailOrPassword);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "login rejected: wrong password");
            return Err(UserError::IncorrectEmailOrPassword);
        }

        info!(user_id = %user.id, "user authenticated");
        Ok(user)
    }

    /// Returns the user's profile.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the user does not exist.
    pub async fn show_profile(&self, user_id: UserId) -> Result<User, UserError> {
        self.directory
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))
    }
}
