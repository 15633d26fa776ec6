//! User repository implementation over the relational store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups report absence as `Ok(None)`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by surrogate key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by the unique `uid` business key
    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>>;

    /// Insert a new user; the store assigns the `id`
    async fn create(&self, uid: String, name: String) -> AppResult<User>;

    /// List all users in query order
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_uid(&self, uid: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Uid.eq(uid))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, uid: String, name: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            uid: Set(uid),
            name: Set(name),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_err)?;
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

/// Map an insert failure, surfacing a duplicate `uid` as a typed violation.
///
/// The store's unique index is the arbiter for concurrent writers; the
/// losing insert observes the constraint error mapped here.
fn map_insert_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::unique_violation("uid"),
        _ => AppError::Database(err),
    }
}
