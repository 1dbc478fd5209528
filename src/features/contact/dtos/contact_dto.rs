use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_email_address, validate_required};

/// Request DTO for a contact form submission
///
/// Missing fields deserialize as empty so they report as `required`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactRequestDto {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub message: String,
}
