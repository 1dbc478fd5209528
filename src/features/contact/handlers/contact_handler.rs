//! Contact form handler

use std::sync::Arc;

use axum::extract::State;

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::contact::dtos::ContactRequestDto;
use crate::features::contact::services::ContactService;
use crate::shared::constants::HOME_PATH;
use crate::shared::flash::Flash;
use crate::shared::redirect::Found;

/// Submit the contact form
///
/// Redirects home with a one-time `success` flash. Invalid input returns the
/// field errors instead.
#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = ContactRequestDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Message accepted, redirect to /"),
        (status = 200, description = "Validation failed, field errors returned"),
        (status = 400, description = "Malformed body")
    ),
    tag = "contact"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppForm(dto): AppForm<ContactRequestDto>,
) -> Result<(Flash, Found)> {
    let flash = service.submit(dto)?;
    Ok((flash, Found(HOME_PATH)))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use serde_json::Value;

    use crate::shared::test_helpers::create_test_server;

    #[tokio::test]
    async fn test_contact_form_submits_successfully() {
        let (server, _) = create_test_server();

        let response = server
            .post("/contact")
            .form(&[
                ("name", "John Doe"),
                ("email", "john@example.com"),
                ("message", "Hello world"),
            ])
            .await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header(header::LOCATION), "/");
        let cookie = response.header(header::SET_COOKIE);
        assert!(cookie.to_str().unwrap().starts_with("flash=success%3A"));
    }

    #[tokio::test]
    async fn test_contact_form_shows_errors_on_invalid_input() {
        let (server, _) = create_test_server();

        let response = server
            .post("/contact")
            .form(&[("name", ""), ("email", "not-an-email"), ("message", "")])
            .await;

        response.assert_status_ok();
        assert!(response.maybe_header(header::SET_COOKIE).is_none());
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        let fields = body["field_errors"].as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[tokio::test]
    async fn test_contact_form_accepts_json() {
        let (server, _) = create_test_server();

        let response = server
            .post("/contact")
            .json(&serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "message": "Hi"
            }))
            .await;

        response.assert_status(StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_missing_fields_count_as_required() {
        let (server, _) = create_test_server();

        let response = server
            .post("/contact")
            .form(&[("email", "john@example.com")])
            .await;

        let body: Value = response.json();
        let fields = body["field_errors"].as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["name"][0], "The name field is required.");
        assert_eq!(fields["message"][0], "The message field is required.");
    }
}
