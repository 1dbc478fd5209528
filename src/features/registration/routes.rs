//! Registration routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::registration::handlers;
use crate::features::registration::services::RegistrationService;

/// Create routes for the registration feature
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .with_state(service)
}
