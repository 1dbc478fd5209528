//! Registration handler

use std::sync::Arc;

use axum::extract::State;

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::registration::dtos::RegisterRequestDto;
use crate::features::registration::services::RegistrationService;
use crate::shared::constants::DASHBOARD_PATH;
use crate::shared::redirect::Found;

/// Register a new user
///
/// Public endpoint. Redirects to the dashboard once the user is stored.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterRequestDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "User registered, redirect to /dashboard"),
        (status = 200, description = "Validation failed, field errors returned, nothing stored"),
        (status = 400, description = "Malformed body")
    ),
    tag = "registration"
)]
pub async fn register(
    State(service): State<Arc<RegistrationService>>,
    AppForm(dto): AppForm<RegisterRequestDto>,
) -> Result<Found> {
    service.register(dto).await?;
    Ok(Found(DASHBOARD_PATH))
}
