//! Property-based tests for `StatementService`.
//!
//! - Property 1: Balance never goes negative over any sequence of requests
//! - Property 2: Balance equals the sum of accepted operations
//! - Property 3: Rejected requests leave the ledger untouched

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::StatementError;
use super::service::StatementService;
use super::store::InMemoryLedgerStore;
use super::types::{OperationType, RecordOperationInput};
use crate::users::{InMemoryUserDirectory, NewUser, UserDirectory};

/// Strategy to generate positive amounts (0.01 to 1,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate operation type.
fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
    prop_oneof![Just(OperationType::Deposit), Just(OperationType::Withdraw)]
}

/// Outcome of replaying a request sequence against a fresh service.
struct Replay {
    balances: Vec<Decimal>,
    accepted_sum: Decimal,
    final_balance: Decimal,
    ledger_len: usize,
    accepted: usize,
}

fn replay(requests: Vec<(OperationType, Decimal)>) -> Replay {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    runtime.block_on(async move {
        let users = Arc::new(InMemoryUserDirectory::new());
        let user = users
            .create(NewUser {
                name: "Prop".to_string(),
                email: "prop@example.com".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let ledger = Arc::new(InMemoryLedgerStore::new());
        let service = StatementService::new(users, ledger.clone());

        let mut balances = Vec::with_capacity(requests.len());
        let mut accepted_sum = Decimal::ZERO;
        let mut accepted = 0;

        for (operation_type, amount) in requests {
            let result = service
                .record_operation(RecordOperationInput {
                    user_id: user.id,
                    operation_type,
                    amount,
                    description: String::new(),
                })
                .await;
            match result {
                Ok(op) => {
                    accepted_sum += op.signed_amount();
                    accepted += 1;
                }
                Err(StatementError::InsufficientFunds { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
            balances.push(service.get_balance(user.id).await.unwrap());
        }

        Replay {
            balances,
            accepted_sum,
            final_balance: service.get_balance(user.id).await.unwrap(),
            ledger_len: ledger.len().await,
            accepted,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property 1: Balance is non-negative after every request.
    #[test]
    fn prop_balance_never_negative(
        requests in prop::collection::vec((operation_type_strategy(), positive_amount()), 0..40)
    ) {
        let result = replay(requests);
        for balance in result.balances {
            prop_assert!(balance >= Decimal::ZERO);
        }
    }

    /// Property 2: Balance equals the signed sum of accepted operations.
    #[test]
    fn prop_balance_equals_accepted_sum(
        requests in prop::collection::vec((operation_type_strategy(), positive_amount()), 0..40)
    ) {
        let result = replay(requests);
        prop_assert_eq!(result.final_balance, result.accepted_sum);
    }

    /// Property 3: Only accepted requests reach the ledger.
    #[test]
    fn prop_rejections_leave_no_trace(
        requests in prop::collection::vec((operation_type_strategy(), positive_amount()), 0..40)
    ) {
        let result = replay(requests);
        prop_assert_eq!(result.ledger_len, result.accepted);
    }
}
