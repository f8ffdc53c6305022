//! Statement routes: deposits, withdrawals, balance, and history.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use finapi_core::statement::{
    BalanceReport, Operation, OperationType, RecordOperationInput, StatementError,
};
use finapi_shared::types::{AmountError, OperationId};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Creates the statements router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statements", get(get_statement))
        .route("/statements/balance", get(get_balance))
        .route("/statements/deposit", post(deposit))
        .route("/statements/withdraw", post(withdraw))
        .route("/statements/{operation_id}", get(get_operation))
}

/// Request body for deposits and withdrawals.
#[derive(Debug, Deserialize)]
pub struct OperationRequest {
    /// Decimal string or JSON number.
    pub amount: Value,
    /// Free-text annotation.
    #[serde(default)]
    pub description: String,
}

/// Reads an amount given either as a decimal string or a JSON number.
///
/// Only parsing happens here; sign and precision are the service's call.
fn parse_amount(value: &Value) -> Result<Decimal, AmountError> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => return Err(AmountError::Unparseable(other.to_string())),
    };

    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| AmountError::Unparseable(raw))
}

async fn record(
    state: &AppState,
    auth: &AuthUser,
    operation_type: OperationType,
    payload: OperationRequest,
) -> Result<(StatusCode, Json<Operation>), ApiError> {
    let amount = parse_amount(&payload.amount).map_err(StatementError::from)?;

    let operation = state
        .statements
        .record_operation(RecordOperationInput {
            user_id: auth.user_id(),
            operation_type,
            amount,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(operation)))
}

/// POST /statements/deposit - Record a deposit.
async fn deposit(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<OperationRequest>,
) -> Result<(StatusCode, Json<Operation>), ApiError> {
    record(&state, &auth, OperationType::Deposit, payload).await
}

/// POST /statements/withdraw - Record a withdrawal.
async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<OperationRequest>,
) -> Result<(StatusCode, Json<Operation>), ApiError> {
    record(&state, &auth, OperationType::Withdraw, payload).await
}

/// GET /statements/balance - Statement and balance from one snapshot.
async fn get_balance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<BalanceReport>, ApiError> {
    Ok(Json(
        state.statements.get_balance_report(auth.user_id()).await?,
    ))
}

/// GET /statements - All operations, oldest first.
async fn get_statement(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Operation>>, ApiError> {
    Ok(Json(state.statements.get_statement(auth.user_id()).await?))
}

/// GET /statements/{operation_id} - One of the caller's operations.
async fn get_operation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(operation_id): Path<OperationId>,
) -> Result<Json<Operation>, ApiError> {
    Ok(Json(
        state
            .statements
            .get_operation(auth.user_id(), operation_id)
            .await?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[rstest]
    #[case(json!("100.50"), dec!(100.50))]
    #[case(json!(" 7 "), dec!(7))]
    #[case(json!(42), dec!(42))]
    #[case(json!(12.25), dec!(12.25))]
    #[case(json!("-3"), dec!(-3))]
    fn test_parse_amount_accepts_strings_and_numbers(
        #[case] input: Value,
        #[case] expected: Decimal,
    ) {
        assert_eq!(parse_amount(&input).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("ten"))]
    #[case(json!(""))]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!([1]))]
    fn test_parse_amount_rejects_garbage(#[case] input: Value) {
        assert!(matches!(
            parse_amount(&input),
            Err(AmountError::Unparseable(_))
        ));
    }
}
