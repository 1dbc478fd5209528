//! User Service - hashing and persistence of registered users

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::features::users::stores::{UserStore, UserStoreError};
use crate::modules::hashing::PasswordHasher;

/// Service owning the user store and the password scheme used for it
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Hash a plaintext password off the async runtime
    pub async fn hash_password(&self, plaintext: &str) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        let plaintext = plaintext.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(AppError::from)
    }

    /// `true` iff `plaintext` matches a digest produced by [`Self::hash_password`]
    #[allow(dead_code)]
    pub fn verify_password(&self, plaintext: &str, stored_hash: &str) -> bool {
        self.hasher.verify(plaintext, stored_hash)
    }

    /// Insert an already-hashed user
    pub async fn create(&self, new_user: NewUser) -> std::result::Result<User, UserStoreError> {
        let user = self.store.create(new_user).await?;
        tracing::info!("User created: id={}", user.id);
        Ok(user)
    }

    #[allow(dead_code)]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.store.find_by_email(email).await?)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.store.count_by_email(email).await? > 0)
    }

    #[allow(dead_code)]
    pub async fn count_by_email(&self, email: &str) -> Result<i64> {
        Ok(self.store.count_by_email(email).await?)
    }
}
