//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{CreateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by surrogate key, failing with `NotFound` on a miss
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Get user by `uid`, failing with `NotFound` on a miss
    async fn get_user_by_uid(&self, uid: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user from validated input
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_uid(&self, uid: &str) -> AppResult<User> {
        self.repo.find_by_uid(uid).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;

        // Check if uid is already taken. The store's unique index still
        // arbitrates concurrent inserts that pass this check.
        if self.repo.find_by_uid(&input.uid).await?.is_some() {
            return Err(AppError::unique_violation("uid"));
        }

        self.repo.create(input.uid, input.name).await
    }
}
