use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::features::users::models::{NewUser, User};
use crate::features::users::stores::{UserStore, UserStoreError};

/// Process-local user store keyed by exact email
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(UserStoreError::DuplicateEmail);
        }

        let user = User::from_new(new_user);
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn count_by_email(&self, email: &str) -> Result<i64, UserStoreError> {
        Ok(i64::from(self.users.read().await.contains_key(email)))
    }
}
