use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::features::pages::dtos::{DashboardResponseDto, HomeResponseDto};
use crate::shared::flash::{ClearFlash, IncomingFlash};
use crate::shared::types::ApiResponse;

/// Home page
///
/// Returns the pending flash notice, if any, and expires it.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Home page", body = ApiResponse<HomeResponseDto>)
    ),
    tag = "pages"
)]
pub async fn home(IncomingFlash(flash): IncomingFlash) -> Response {
    let consumed = flash.is_some();
    let body = Json(ApiResponse::success(
        Some(HomeResponseDto { flash }),
        None,
        None,
    ));

    if consumed {
        (ClearFlash, body).into_response()
    } else {
        body.into_response()
    }
}

/// Dashboard shown after registering
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = ApiResponse<DashboardResponseDto>)
    ),
    tag = "pages"
)]
pub async fn dashboard() -> Json<ApiResponse<DashboardResponseDto>> {
    Json(ApiResponse::success(
        Some(DashboardResponseDto {
            title: "Dashboard".to_string(),
        }),
        Some("Welcome!".to_string()),
        None,
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue};
    use serde_json::Value;

    use crate::shared::test_helpers::create_test_server;

    #[tokio::test]
    async fn test_home_without_flash() {
        let (server, _) = create_test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.maybe_header(header::SET_COOKIE).is_none());
        let body: Value = response.json();
        assert!(body["data"]["flash"].is_null());
    }

    #[tokio::test]
    async fn test_flash_is_read_once() {
        let (server, _) = create_test_server();

        let submitted = server
            .post("/contact")
            .form(&[
                ("name", "John Doe"),
                ("email", "john@example.com"),
                ("message", "Hello world"),
            ])
            .await;
        let set_cookie = submitted.header(header::SET_COOKIE);
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();

        let first = server
            .get("/")
            .add_header(header::COOKIE, HeaderValue::from_str(&pair).unwrap())
            .await;
        let body: Value = first.json();
        assert_eq!(body["data"]["flash"]["level"], "success");
        assert_eq!(body["data"]["flash"]["message"], "Message sent!");
        let cleared = first.header(header::SET_COOKIE);
        assert!(cleared.to_str().unwrap().contains("Max-Age=0"));

        // Browser dropped the expired cookie
        let second = server.get("/").await;
        let body: Value = second.json();
        assert!(body["data"]["flash"].is_null());
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (server, _) = create_test_server();

        let response = server.get("/dashboard").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["title"], "Dashboard");
    }
}
