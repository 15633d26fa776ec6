//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User domain entity
///
/// `id` is the store-assigned surrogate key; `uid` is the externally
/// supplied business key, unique across all users and immutable once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub uid: String,
    pub name: String,
}

/// User creation data transfer object
///
/// `id` is never caller-supplied; the store assigns it on insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    /// Externally-facing unique identifier
    // Bounds mirror config::UID_MAX_LENGTH / NAME_MAX_LENGTH, which the
    // users table schema is built from; the test module asserts they agree.
    #[validate(length(min = 1, max = 30, message = "uid must be between 1 and 30 characters"))]
    pub uid: String,
    /// User display name
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
}

impl CreateUser {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
        }
    }
}
