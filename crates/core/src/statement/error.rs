//! Statement error types.
//!
//! Every business rule is checked before anything is written, so none of
//! these errors ever leaves a partial operation behind.

use finapi_shared::AppError;
use finapi_shared::types::{AmountError, OperationId, UserId};
use rust_decimal::Decimal;
use thiserror::Error;

use super::balance::BalanceOverflow;
use crate::persistence::StoreError;

/// Errors that can occur during statement operations.
#[derive(Debug, Error)]
pub enum StatementError {
    /// The user does not exist in the directory.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Amount is zero, negative, out of range, or not a valid monetary quantity.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// A withdrawal would make the balance negative.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The amount the caller tried to withdraw.
        requested: Decimal,
        /// The balance at the time of the attempt.
        available: Decimal,
    },

    /// No operation with this ID belongs to the user.
    #[error("Operation not found: {0}")]
    OperationNotFound(OperationId),

    /// The stored ledger sums past what a balance can hold.
    #[error("Balance overflow: {0}")]
    BalanceOverflow(#[from] BalanceOverflow),

    /// The ledger or user directory failed.
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl StatementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::OperationNotFound(_) => "OPERATION_NOT_FOUND",
            Self::BalanceOverflow(_) => "BALANCE_OVERFLOW",
            Self::Persistence(_) => "PERSISTENCE_FAILURE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_) | Self::InsufficientFunds { .. } => 400,
            Self::UserNotFound(_) | Self::OperationNotFound(_) => 404,
            Self::BalanceOverflow(_) => 500,
            Self::Persistence(_) => 503,
        }
    }

    /// Returns true if the whole call may be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<StoreError> for StatementError {
    fn from(err: StoreError) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<StatementError> for AppError {
    fn from(err: StatementError) -> Self {
        let message = err.to_string();
        match err {
            StatementError::UserNotFound(_) | StatementError::OperationNotFound(_) => {
                Self::NotFound(message)
            }
            StatementError::InvalidAmount(_) => Self::Validation(message),
            StatementError::InsufficientFunds { .. } => Self::BusinessRule(message),
            StatementError::BalanceOverflow(_) => Self::Internal(message),
            StatementError::Persistence(_) => Self::Unavailable(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StatementError::UserNotFound(UserId::new()).error_code(),
            "USER_NOT_FOUND"
        );
        assert_eq!(
            StatementError::InvalidAmount(AmountError::Zero).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            StatementError::InsufficientFunds {
                requested: dec!(1),
                available: dec!(0),
            }
            .error_code(),
            "INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            StatementError::InvalidAmount(AmountError::Zero).http_status_code(),
            400
        );
        assert_eq!(
            StatementError::OperationNotFound(OperationId::new()).http_status_code(),
            404
        );
        assert_eq!(
            StatementError::Persistence("down".into()).http_status_code(),
            503
        );
        assert_eq!(
            StatementError::BalanceOverflow(BalanceOverflow).http_status_code(),
            500
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(StatementError::Persistence("timeout".into()).is_retryable());
        assert!(
            !StatementError::InsufficientFunds {
                requested: dec!(60),
                available: dec!(40),
            }
            .is_retryable()
        );
        assert!(!StatementError::UserNotFound(UserId::new()).is_retryable());
        assert!(!StatementError::BalanceOverflow(BalanceOverflow).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = StatementError::InsufficientFunds {
            requested: dec!(100.00),
            available: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 100.00, available 50.00"
        );
    }

    #[test]
    fn test_into_app_error_keeps_kinds_distinct() {
        let funds: AppError = StatementError::InsufficientFunds {
            requested: dec!(1),
            available: dec!(0),
        }
        .into();
        let unavailable: AppError =
            StatementError::from(StoreError::Unavailable("db".into())).into();

        let overflow: AppError = StatementError::from(BalanceOverflow).into();

        assert_eq!(funds.error_code(), "BUSINESS_RULE_VIOLATION");
        assert_eq!(overflow.status_code(), 500);
        assert_eq!(unavailable.error_code(), "SERVICE_UNAVAILABLE");
        assert!(unavailable.is_retryable());
    }
}
