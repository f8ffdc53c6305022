//! Account statements.
//!
//! This module implements deposits, withdrawals, and the queries over them:
//! - Operation domain types
//! - Balance derivation from the ledger
//! - The append-only ledger store contract
//! - Per-user locking for the record critical section
//! - The statement service that ties them together

pub mod balance;
pub mod error;
pub mod locks;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod balance_props;
#[cfg(test)]
mod service_props;

pub use balance::{BalanceOverflow, calculate_balance, can_withdraw};
pub use error::StatementError;
pub use locks::UserLocks;
pub use service::StatementService;
pub use store::{InMemoryLedgerStore, LedgerStore};
pub use types::{BalanceReport, Operation, OperationType, RecordOperationInput};
