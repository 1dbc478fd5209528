use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::contact::{routes as contact_routes, ContactService};
use crate::features::pages::routes as pages_routes;
use crate::features::registration::{routes as registration_routes, RegistrationService};
use crate::features::users::UserService;

/// Simple health check endpoint (no auth required)
async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Build the application router with all features and the HTTP middleware stack
pub fn create_app(users: Arc<UserService>, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let contact_service = Arc::new(ContactService::new());
    let registration_service = Arc::new(RegistrationService::new(users));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(pages_routes::routes())
        .merge(contact_routes::routes(contact_service))
        .merge(registration_routes::routes(registration_service));

    Router::new()
        .merge(swagger_routes(swagger))
        .merge(public_routes)
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue, StatusCode};
    use base64::prelude::*;

    use super::*;
    use crate::shared::test_helpers::{
        create_test_app_config, create_test_server, create_test_user_service,
    };

    #[tokio::test]
    async fn test_health_check() {
        let (server, _) = create_test_server();
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (server, _) = create_test_server();
        server
            .get("/nowhere")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let (server, _) = create_test_server();
        let response = server.get("/health").await;
        assert!(response.maybe_header("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_openapi_document_lists_form_routes() {
        let (server, _) = create_test_server();
        let doc: serde_json::Value = server.get("/api-docs/openapi.json").await.json();

        assert!(doc["paths"]["/contact"]["post"].is_object());
        assert!(doc["paths"]["/register"]["post"].is_object());
    }

    #[tokio::test]
    async fn test_swagger_basic_auth() {
        let swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            title: "Portal API".to_string(),
            version: "0.1.0".to_string(),
            description: String::new(),
        };
        let app = create_app(
            Arc::new(create_test_user_service()),
            &create_test_app_config(),
            &swagger,
        );
        let server = axum_test::TestServer::new(app).unwrap();

        server
            .get("/api-docs/openapi.json")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let auth = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));
        server
            .get("/api-docs/openapi.json")
            .add_header(header::AUTHORIZATION, HeaderValue::from_str(&auth).unwrap())
            .await
            .assert_status_ok();

        // Form routes stay public
        server.get("/").await.assert_status_ok();
    }
}
