//! Per-user mutual exclusion for the record-operation critical section.
//!
//! Reading the balance and appending the new operation must happen under
//! the same lock, otherwise two withdrawals can both see the old balance.
//! Locks are keyed by user, so different users never wait on each other.

use std::sync::Arc;

use dashmap::DashMap;
use finapi_shared::types::UserId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per user.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl UserLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `user_id`'s ledger.
    ///
    /// The guard releases the lock when dropped.
    pub async fn lock(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is not held across the await.
        let mutex = Arc::clone(&self.locks.entry(user_id).or_default());
        mutex.lock_owned().await
    }

    /// Returns the number of users that have been locked at least once.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Returns true if no user has been locked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_same_user_is_exclusive() {
        let locks = UserLocks::new();
        let user = UserId::new();

        let guard = locks.lock(user).await;
        let second = timeout(Duration::from_millis(50), locks.lock(user)).await;
        assert!(second.is_err(), "second lock should wait while the first is held");

        drop(guard);
        let third = timeout(Duration::from_millis(50), locks.lock(user)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn test_different_users_do_not_contend() {
        let locks = UserLocks::new();

        let _alice = locks.lock(UserId::new()).await;
        let bob = timeout(Duration::from_millis(50), locks.lock(UserId::new())).await;

        assert!(bob.is_ok());
        assert_eq!(locks.len(), 2);
    }
}
