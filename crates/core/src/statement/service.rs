//! Statement service: records deposits and withdrawals and answers balance
//! and statement queries.
//!
//! Recording a withdrawal reads the balance and appends under the user's
//! lock, so concurrent withdrawals for one user are serialized and the
//! balance can never go negative. Queries take no lock: each one reads a
//! single ledger snapshot.

use std::sync::Arc;

use finapi_shared::types::{Amount, OperationId, UserId};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::balance::{calculate_balance, can_withdraw};
use super::error::StatementError;
use super::locks::UserLocks;
use super::store::LedgerStore;
use super::types::{BalanceReport, Operation, OperationType, RecordOperationInput};
use crate::users::UserDirectory;

/// Orchestrates the user directory, the ledger, and per-user locks.
pub struct StatementService {
    users: Arc<dyn UserDirectory>,
    ledger: Arc<dyn LedgerStore>,
    locks: UserLocks,
}

impl std::fmt::Debug for StatementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatementService")
            .field("locked_users", &self.locks.len())
            .finish_non_exhaustive()
    }
}

impl StatementService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(users: Arc<dyn UserDirectory>, ledger: Arc<dyn LedgerStore>) -> Self {
        Self {
            users,
            ledger,
            locks: UserLocks::new(),
        }
    }

    /// Records a deposit or withdrawal for an existing user.
    ///
    /// Checks run in this order:
    /// 1. The user exists
    /// 2. The amount is strictly positive, at most `MAX_AMOUNT`, with at
    ///    most four decimal places
    /// 3. For withdrawals, the current balance covers the amount
    ///
    /// Nothing is appended unless every check passes.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user is not in the directory
    /// - `InvalidAmount` if the amount is zero, negative, too precise, or too large
    /// - `InsufficientFunds` if a withdrawal exceeds the balance
    /// - `BalanceOverflow` if the stored ledger cannot be summed
    /// - `Persistence` if a store fails
    pub async fn record_operation(
        &self,
        input: RecordOperationInput,
    ) -> Result<Operation, StatementError> {
        let RecordOperationInput {
            user_id,
            operation_type,
            amount,
            description,
        } = input;

        self.ensure_user_exists(user_id).await?;
        let amount = Amount::new(amount)?;

        let _guard = self.locks.lock(user_id).await;

        if operation_type == OperationType::Withdraw {
            let available = calculate_balance(&self.ledger.list_by_user(user_id).await?)?;
            if !can_withdraw(available, amount) {
                warn!(
                    user_id = %user_id,
                    requested = %amount,
                    available = %available,
                    "withdrawal rejected: insufficient funds"
                );
                return Err(StatementError::InsufficientFunds {
                    requested: amount.value(),
                    available,
                });
            }
        }

        let operation = Operation::new(user_id, operation_type, amount, description);
        self.ledger.append(&operation).await?;

        info!(
            user_id = %user_id,
            operation_id = %operation.id,
            operation_type = %operation_type,
            amount = %amount,
            "operation recorded"
        );

        Ok(operation)
    }

    /// Returns the user's current balance.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound`, `BalanceOverflow`, or `Persistence`.
    pub async fn get_balance(&self, user_id: UserId) -> Result<Decimal, StatementError> {
        self.ensure_user_exists(user_id).await?;
        let operations = self.ledger.list_by_user(user_id).await?;
        Ok(calculate_balance(&operations)?)
    }

    /// Returns every operation of the user in creation order.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` or `Persistence`.
    pub async fn get_statement(&self, user_id: UserId) -> Result<Vec<Operation>, StatementError> {
        self.ensure_user_exists(user_id).await?;
        Ok(self.ledger.list_by_user(user_id).await?)
    }

    /// Returns the statement and the balance derived from the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound`, `BalanceOverflow`, or `Persistence`.
    pub async fn get_balance_report(
        &self,
        user_id: UserId,
    ) -> Result<BalanceReport, StatementError> {
        self.ensure_user_exists(user_id).await?;
        let statement = self.ledger.list_by_user(user_id).await?;
        let balance = calculate_balance(&statement)?;
        debug!(user_id = %user_id, operations = statement.len(), %balance, "balance report");
        Ok(BalanceReport { statement, balance })
    }

    /// Returns one operation owned by the user.
    ///
    /// An operation that belongs to someone else is reported exactly like
    /// one that does not exist.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound`, `OperationNotFound`, or `Persistence`.
    pub async fn get_operation(
        &self,
        user_id: UserId,
        operation_id: OperationId,
    ) -> Result<Operation, StatementError> {
        self.ensure_user_exists(user_id).await?;
        self.ledger
            .find_by_id(user_id, operation_id)
            .await?
            .ok_or(StatementError::OperationNotFound(operation_id))
    }

    async fn ensure_user_exists(&self, user_id: UserId) -> Result<(), StatementError> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(StatementError::UserNotFound(user_id)),
        }
    }
}
