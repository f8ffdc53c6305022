//! Balance derivation.
//!
//! Balance is never stored: it is always folded from the ledger, so it
//! cannot drift from history. Everything here is pure.

use finapi_shared::types::Amount;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Operation;

/// The signed sum of a ledger left the range `Decimal` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("balance exceeds the representable range")]
pub struct BalanceOverflow;

/// Returns `Σ deposits − Σ withdrawals` over `operations`.
///
/// Addition is commutative, so the result does not depend on order.
///
/// # Errors
///
/// Returns `BalanceOverflow` if an intermediate sum does not fit in a
/// `Decimal`.
pub fn calculate_balance(operations: &[Operation]) -> Result<Decimal, BalanceOverflow> {
    checked_sum(operations.iter().map(Operation::signed_amount))
}

/// Returns true if `amount` can be withdrawn from `available`.
#[must_use]
pub fn can_withdraw(available: Decimal, amount: Amount) -> bool {
    amount.value() <= available
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Result<Decimal, BalanceOverflow> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or(BalanceOverflow)
}
