//! User repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use finapi_core::persistence::StoreError;
use finapi_core::users::{NewUser, User, UserDirectory};
use finapi_shared::types::UserId;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::store_error;
use crate::entities::users;

/// Postgres-backed user directory.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, StoreError> {
        users::Entity::find_by_id(user_id.into_inner())
            .one(&self.db)
            .await
            .map(|found| found.map(to_domain))
            .map_err(store_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|found| found.map(to_domain))
            .map_err(store_error)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let now = Utc::now().fixed_offset();
        let user = users::ActiveModel {
            id: Set(UserId::new().into_inner()),
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(&self.db)
            .await
            .map(to_domain)
            .map_err(store_error)
    }
}
