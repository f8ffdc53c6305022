//! Monetary amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of fractional digits an amount may carry.
///
/// Matches the `NUMERIC(19, 4)` column the ledger is stored in.
pub const MAX_SCALE: u32 = 4;

/// Largest amount a single operation may carry: `999_999_999_999_999.9999`.
///
/// Fifteen integer digits is all `NUMERIC(19, 4)` leaves room for.
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(2_313_682_943, 2_328_306_436, 0, false, MAX_SCALE);

/// Reasons an amount can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Amount is zero.
    #[error("amount must be greater than zero")]
    Zero,

    /// Amount is negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),

    /// Amount carries more fractional digits than the ledger stores.
    #[error("amount {0} has more than {MAX_SCALE} decimal places")]
    TooPrecise(Decimal),

    /// Amount exceeds [`MAX_AMOUNT`].
    #[error("amount {0} exceeds the maximum of {MAX_AMOUNT}")]
    TooLarge(Decimal),

    /// Input could not be parsed as a decimal number.
    #[error("amount is not a valid decimal: {0}")]
    Unparseable(String),
}

/// A strictly positive monetary quantity.
///
/// Operations never carry a sign: the operation type decides whether the
/// amount adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Validates a decimal as an operation amount.
    ///
    /// # Errors
    ///
    /// Returns `AmountError` if the value is zero, negative, too precise, or
    /// above [`MAX_AMOUNT`].
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_zero() {
            return Err(AmountError::Zero);
        }
        if value.is_sign_negative() {
            return Err(AmountError::Negative(value));
        }
        let normalized = value.normalize();
        if normalized.scale() > MAX_SCALE {
            return Err(AmountError::TooPrecise(value));
        }
        if normalized > MAX_AMOUNT {
            return Err(AmountError::TooLarge(value));
        }
        Ok(Self(normalized))
    }

    /// Parses and validates an amount from its decimal string form.
    ///
    /// # Errors
    ///
    /// Returns `AmountError::Unparseable` for non-numeric input, otherwise
    /// the same errors as [`Amount::new`].
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let value: Decimal = input
            .trim()
            .parse()
            .map_err(|_| AmountError::Unparseable(input.to_string()))?;
        Self::new(value)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
