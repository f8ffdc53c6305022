//! Ledger store contract and its in-memory implementation.
//!
//! The ledger is append-only: the trait has no update or delete method.

use std::collections::HashMap;

use async_trait::async_trait;
use finapi_shared::types::{OperationId, UserId};
use tokio::sync::RwLock;

use super::types::Operation;
use crate::persistence::StoreError;

/// Append-only storage of operations, keyed by user.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Persists one operation.
    ///
    /// Must not drop it or reorder it relative to the same user's other
    /// operations.
    async fn append(&self, operation: &Operation) -> Result<(), StoreError>;

    /// Returns all operations of a user in creation order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Operation>, StoreError>;

    /// Returns one operation if it exists and belongs to `user_id`.
    async fn find_by_id(
        &self,
        user_id: UserId,
        operation_id: OperationId,
    ) -> Result<Option<Operation>, StoreError>;
}

/// In-memory ledger used by tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    by_user: RwLock<HashMap<UserId, Vec<Operation>>>,
}

impl InMemoryLedgerStore {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of operations across all users.
    pub async fn len(&self) -> usize {
        self.by_user.read().await.values().map(Vec::len).sum()
    }

    /// Returns true if no operation has been recorded.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn append(&self, operation: &Operation) -> Result<(), StoreError> {
        self.by_user
            .write()
            .await
            .entry(operation.user_id)
            .or_default()
            .push(operation.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Operation>, StoreError> {
        Ok(self
            .by_user
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        user_id: UserId,
        operation_id: OperationId,
    ) -> Result<Option<Operation>, StoreError> {
        Ok(self
            .by_user
            .read()
            .await
            .get(&user_id)
            .and_then(|ops| ops.iter().find(|op| op.id == operation_id))
            .cloned())
    }
}
