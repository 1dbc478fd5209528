use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` to a fixed location, the status browsers follow with a GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.0)]).into_response()
    }
}
