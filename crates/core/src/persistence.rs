//! Errors reported by store implementations.
//!
//! Both the in-memory stores and the database repositories speak this
//! error type, so the services never see a driver error directly.

use thiserror::Error;

/// Failure reported by a user directory or ledger store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stored row could not be mapped back into a domain value.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}
