//! Statement domain types.
//!
//! An `Operation` is one recorded deposit or withdrawal. Operations are
//! immutable: nothing in this crate exposes a way to change or remove one
//! after it has been appended to the ledger.

use chrono::{DateTime, Utc};
use finapi_shared::types::{Amount, OperationId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of monetary movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Money coming into the account.
    Deposit,
    /// Money leaving the account.
    Withdraw,
}

impl OperationType {
    /// Returns the wire/storage name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }

    /// Applies this type's sign to an unsigned amount.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Deposit => amount,
            Self::Withdraw => -amount,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            _ => Err(format!("Unknown operation type: {s}")),
        }
    }
}

/// One recorded ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation ID.
    pub id: OperationId,
    /// Owning user.
    pub user_id: UserId,
    /// Deposit or withdrawal.
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// Unsigned, strictly positive amount.
    pub amount: Amount,
    /// Free-text annotation.
    pub description: String,
    /// When the operation was recorded.
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Builds a new operation with a fresh ID and the current timestamp.
    #[must_use]
    pub fn new(
        user_id: UserId,
        operation_type: OperationType,
        amount: Amount,
        description: String,
    ) -> Self {
        Self {
            id: OperationId::new(),
            user_id,
            operation_type,
            amount,
            description,
            created_at: Utc::now(),
        }
    }

    /// Returns the amount with the sign of its operation type.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.operation_type.signed(self.amount.value())
    }
}

/// Input for recording a new operation.
///
/// The amount is a raw decimal; the service validates it.
#[derive(Debug, Clone)]
pub struct RecordOperationInput {
    /// The authenticated user.
    pub user_id: UserId,
    /// Deposit or withdrawal.
    pub operation_type: OperationType,
    /// Requested amount (must be positive).
    pub amount: Decimal,
    /// Free-text annotation.
    pub description: String,
}

/// A statement together with the balance derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    /// All operations, oldest first.
    pub statement: Vec<Operation>,
    /// Net balance of `statement`.
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_operation_type_sign() {
        assert_eq!(OperationType::Deposit.signed(dec!(10)), dec!(10));
        assert_eq!(OperationType::Withdraw.signed(dec!(10)), dec!(-10));
    }

    #[test]
    fn test_operation_type_from_str() {
        assert_eq!(OperationType::from_str("deposit").unwrap(), OperationType::Deposit);
        assert_eq!(OperationType::from_str("WITHDRAW").unwrap(), OperationType::Withdraw);
        assert!(OperationType::from_str("transfer").is_err());
    }

    #[test]
    fn test_operation_serializes_type_field() {
        let op = Operation::new(
            UserId::new(),
            OperationType::Withdraw,
            Amount::new(dec!(25.5)).unwrap(),
            "Withdraw test".to_string(),
        );
        let json = serde_json::to_value(&op).unwrap();

        assert_eq!(json["type"], "withdraw");
        assert_eq!(json["amount"], "25.5");
        assert_eq!(json["description"], "Withdraw test");
        assert_eq!(op.signed_amount(), dec!(-25.5));
    }
}
