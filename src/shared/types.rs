use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::VALIDATION_FAILED_MESSAGE;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
    /// Per-field reasons, present only on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub field_errors: Option<FieldErrors>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
            field_errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
            field_errors: None,
        }
    }

    pub fn validation_failed(field_errors: FieldErrors) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: Some(VALIDATION_FAILED_MESSAGE.to_string()),
            meta: None,
            errors: Some(field_errors.messages()),
            field_errors: Some(field_errors),
        }
    }
}
