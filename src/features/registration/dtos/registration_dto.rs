use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{
    validate_email_address, validate_required, validate_required_secret,
};

/// Request DTO for user registration
///
/// Confirmation and uniqueness are checked by the service, since they need
/// more than the field itself.
#[derive(Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required_secret"))]
    #[schema(format = Password)]
    pub password: String,

    /// Must equal `password` exactly
    #[serde(default)]
    #[schema(format = Password)]
    pub password_confirmation: String,
}

impl fmt::Debug for RegisterRequestDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequestDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("password_confirmation", &"[redacted]")
            .finish()
    }
}
