//! Registration Service - validates sign-ups and creates users

use std::sync::Arc;

use validator::Validate;

use crate::core::error::Result;
use crate::features::registration::dtos::RegisterRequestDto;
use crate::features::users::models::{NewUser, User};
use crate::features::users::stores::UserStoreError;
use crate::features::users::UserService;
use crate::shared::validation::{reason, FieldErrors};

/// Service handling user sign-ups
pub struct RegistrationService {
    users: Arc<UserService>,
}

impl RegistrationService {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// Register a new user, or return every field error at once
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<User> {
        let mut errors = match dto.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        let name = dto.name.trim();
        let email = dto.email.trim();

        // A missing password already reports `required`
        if !errors.has("password") && dto.password != dto.password_confirmation {
            errors.add("password", reason("password", "confirmed"));
        }

        // Only well-formed addresses are looked up
        if !errors.has("email") && self.users.email_exists(email).await? {
            errors.add("email", reason("email", "unique"));
        }

        errors.into_result()?;

        let password_hash = self.users.hash_password(&dto.password).await?;

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };

        match self.users.create(new_user).await {
            Ok(user) => {
                tracing::info!("User registered: id={}", user.id);
                Ok(user)
            }
            Err(UserStoreError::DuplicateEmail) => {
                // Lost a race with a concurrent registration for the same email
                tracing::warn!("Duplicate email rejected at insert time");
                let mut errors = FieldErrors::new();
                errors.add("email", reason("email", "unique"));
                Err(errors.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
