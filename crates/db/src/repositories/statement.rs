//! Statement repository: the Postgres ledger.
//!
//! Only inserts and reads. Rows come back ordered by `created_at, id`;
//! IDs are UUID v7 so the tiebreak follows creation order too.

use async_trait::async_trait;
use chrono::Utc;
use finapi_core::persistence::StoreError;
use finapi_core::statement::{LedgerStore, Operation};
use finapi_shared::types::{Amount, OperationId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::store_error;
use crate::entities::statements;

/// Postgres-backed ledger store.
#[derive(Debug, Clone)]
pub struct StatementRepository {
    db: DatabaseConnection,
}

impl StatementRepository {
    /// Creates a new statement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: statements::Model) -> Result<Operation, StoreError> {
    let amount = Amount::new(model.amount)
        .map_err(|e| StoreError::Corrupt(format!("statement {}: {e}", model.id)))?;

    Ok(Operation {
        id: OperationId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        operation_type: model.operation_type.into(),
        amount,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

#[async_trait]
impl LedgerStore for StatementRepository {
    async fn append(&self, operation: &Operation) -> Result<(), StoreError> {
        let row = statements::ActiveModel {
            id: Set(operation.id.into_inner()),
            user_id: Set(operation.user_id.into_inner()),
            operation_type: Set(operation.operation_type.into()),
            amount: Set(operation.amount.value()),
            description: Set(operation.description.clone()),
            created_at: Set(operation.created_at.fixed_offset()),
        };

        row.insert(&self.db).await.map_err(store_error)?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Operation>, StoreError> {
        statements::Entity::find()
            .filter(statements::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(statements::Column::CreatedAt)
            .order_by_asc(statements::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_by_id(
        &self,
        user_id: UserId,
        operation_id: OperationId,
    ) -> Result<Option<Operation>, StoreError> {
        statements::Entity::find_by_id(operation_id.into_inner())
            .filter(statements::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(store_error)?
            .map(to_domain)
            .transpose()
    }
}
