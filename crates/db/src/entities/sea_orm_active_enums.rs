//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Postgres `operation_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "operation_type")]
pub enum OperationType {
    #[sea_orm(string_value = "deposit")]
    Deposit,
    #[sea_orm(string_value = "withdraw")]
    Withdraw,
}

impl From<finapi_core::statement::OperationType> for OperationType {
    fn from(value: finapi_core::statement::OperationType) -> Self {
        match value {
            finapi_core::statement::OperationType::Deposit => Self::Deposit,
            finapi_core::statement::OperationType::Withdraw => Self::Withdraw,
        }
    }
}

impl From<OperationType> for finapi_core::statement::OperationType {
    fn from(value: OperationType) -> Self {
        match value {
            OperationType::Deposit => Self::Deposit,
            OperationType::Withdraw => Self::Withdraw,
        }
    }
}
