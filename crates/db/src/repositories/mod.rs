//! Repository implementations of the core store traits.

mod statement;
mod user;

pub use statement::StatementRepository;
pub use user::UserRepository;

use finapi_core::persistence::StoreError;
use sea_orm::{DbErr, SqlErr};
use tracing::error;

/// Maps a database error onto the store error taxonomy.
///
/// Unique-constraint violations become `Conflict`; everything else is
/// reported as the store being unavailable.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return StoreError::Conflict(detail);
    }
    error!(error = %err, "database operation failed");
    StoreError::Unavailable(err.to_string())
}
