#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::core::config::{AppConfig, HashingConfig, SwaggerConfig};
#[cfg(test)]
use crate::core::router::create_app;
#[cfg(test)]
use crate::features::users::stores::InMemoryUserStore;
#[cfg(test)]
use crate::features::users::UserService;
#[cfg(test)]
use crate::modules::hashing::Argon2Hasher;

/// In-memory users with the cheapest Argon2 parameters
#[cfg(test)]
pub fn create_test_user_service() -> UserService {
    let hasher = Argon2Hasher::new(&HashingConfig::low_cost()).expect("valid test params");
    UserService::new(Arc::new(InMemoryUserStore::new()), Arc::new(hasher))
}

#[cfg(test)]
pub fn create_test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
    }
}

#[cfg(test)]
fn create_test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        username: None,
        password: None,
        title: "Portal API".to_string(),
        version: "0.1.0".to_string(),
        description: "Test".to_string(),
    }
}

/// Full application over an in-memory store, plus a handle on its users
#[cfg(test)]
pub fn create_test_server() -> (TestServer, Arc<UserService>) {
    let users = Arc::new(create_test_user_service());
    let app = create_app(
        Arc::clone(&users),
        &create_test_app_config(),
        &create_test_swagger_config(),
    );
    let server = TestServer::new(app).expect("test server starts");
    (server, users)
}
