//! Page routes

use axum::{routing::get, Router};

use crate::features::pages::handlers;

/// Create routes for the landing pages
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/dashboard", get(handlers::dashboard))
}
