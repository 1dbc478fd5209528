use async_trait::async_trait;
use thiserror::Error;

use crate::features::users::models::{NewUser, User};

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("A user with this email already exists")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for users
///
/// Implementations must make the email uniqueness check and the insert a
/// single atomic step.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user, failing with [`UserStoreError::DuplicateEmail`] if the email is taken
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;

    async fn count_by_email(&self, email: &str) -> Result<i64, UserStoreError>;
}
