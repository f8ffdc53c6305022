//! Users: the directory contract, registration, and authentication.
//!
//! The statement service depends only on [`UserDirectory`] to confirm that
//! a user exists.

pub mod directory;
pub mod error;
pub mod password;
pub mod service;

pub use directory::{InMemoryUserDirectory, NewUser, User, UserDirectory};
pub use error::UserError;
pub use password::{PasswordError, hash_password, verify_password};
pub use service::{UserService, normalize_email};
