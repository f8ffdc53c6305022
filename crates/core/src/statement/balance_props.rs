//! Property-based tests for balance derivation.
//!
//! - Property 1: Balance equals signed sum of operations
//! - Property 2: Balance is independent of evaluation order
//! - Property 3: Re-evaluation is idempotent
//! - Property 4: Ledgers of in-range amounts never overflow

use finapi_shared::types::{Amount, MAX_AMOUNT, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{calculate_balance, can_withdraw};
use super::types::{Operation, OperationType};

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Amount> {
    (1i64..1_000_000i64).prop_map(|cents| Amount::new(Decimal::new(cents, 2)).unwrap())
}

/// Strategy to generate amounts near the upper bound.
fn large_amount() -> impl Strategy<Value = Amount> {
    (0i64..1_000_000i64).prop_map(|offset| Amount::new(MAX_AMOUNT - Decimal::from(offset)).unwrap())
}

/// Strategy to generate operation type.
fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
    prop_oneof![Just(OperationType::Deposit), Just(OperationType::Withdraw)]
}

/// Strategy to generate a ledger of up to `max_len` operations for one user.
fn ledger_strategy(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
    let user_id = UserId::new();
    prop::collection::vec((operation_type_strategy(), positive_amount()), 0..=max_len).prop_map(
        move |pairs| {
            pairs
                .into_iter()
                .map(|(t, amount)| Operation::new(user_id, t, amount, String::new()))
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: Balance equals deposits minus withdrawals.
    #[test]
    fn prop_balance_is_deposits_minus_withdrawals(ops in ledger_strategy(30)) {
        let deposits: Decimal = ops
            .iter()
            .filter(|o| o.operation_type == OperationType::Deposit)
            .map(|o| o.amount.value())
            .sum();
        let withdrawals: Decimal = ops
            .iter()
            .filter(|o| o.operation_type == OperationType::Withdraw)
            .map(|o| o.amount.value())
            .sum();

        prop_assert_eq!(calculate_balance(&ops), Ok(deposits - withdrawals));
    }

    /// Property 2: Reversing the ledger does not change the balance.
    #[test]
    fn prop_balance_order_independent(ops in ledger_strategy(30)) {
        let mut reversed = ops.clone();
        reversed.reverse();

        prop_assert_eq!(calculate_balance(&ops), calculate_balance(&reversed));
    }

    /// Property 3: Evaluating twice yields the same result.
    #[test]
    fn prop_balance_idempotent(ops in ledger_strategy(30)) {
        prop_assert_eq!(calculate_balance(&ops), calculate_balance(&ops));
    }

    /// Property 4: Many near-maximum deposits still produce a balance.
    #[test]
    fn prop_large_deposits_do_not_overflow(
        amounts in prop::collection::vec(large_amount(), 0..=200),
    ) {
        let user_id = UserId::new();
        let ops: Vec<Operation> = amounts
            .into_iter()
            .map(|amount| Operation::new(user_id, OperationType::Deposit, amount, String::new()))
            .collect();

        let balance = calculate_balance(&ops);
        prop_assert!(balance.is_ok());
        prop_assert!(balance.unwrap() >= Decimal::ZERO);
    }

    /// A withdrawal admitted by `can_withdraw` never leaves a negative balance.
    #[test]
    fn prop_admitted_withdrawal_keeps_balance_non_negative(
        available_cents in 0i64..1_000_000i64,
        amount in positive_amount(),
    ) {
        let available = Decimal::new(available_cents, 2);
        if can_withdraw(available, amount) {
            prop_assert!(available - amount.value() >= Decimal::ZERO);
        } else {
            prop_assert!(amount.value() > available);
        }
    }
}
