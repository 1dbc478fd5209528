use axum::{
    body::Body,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Form body extractor that also accepts JSON, with consistent error responses
///
/// `application/json` bodies are decoded as JSON; anything else is treated as
/// `application/x-www-form-urlencoded`.
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            match Json::<T>::from_request(req, state).await {
                Ok(value) => Ok(Self(value.0)),
                Err(rejection) => Err(AppFormRejection::Json(rejection)),
            }
        } else {
            match Form::<T>::from_request(req, state).await {
                Ok(value) => Ok(Self(value.0)),
                Err(rejection) => Err(AppFormRejection::Form(rejection)),
            }
        }
    }
}

fn is_json(req: &Request<Body>) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

pub enum AppFormRejection {
    Json(JsonRejection),
    Form(FormRejection),
}

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AppFormRejection::Json(JsonRejection::JsonDataError(err)) => {
                format!("Invalid JSON data: {}", err)
            }
            AppFormRejection::Json(JsonRejection::JsonSyntaxError(err)) => {
                format!("Invalid JSON syntax: {}", err)
            }
            AppFormRejection::Json(_) => "Failed to parse JSON body".to_string(),
            AppFormRejection::Form(FormRejection::FailedToDeserializeForm(err)) => {
                format!("Invalid form data: {}", err)
            }
            AppFormRejection::Form(FormRejection::FailedToDeserializeFormBody(err)) => {
                format!("Invalid form data: {}", err)
            }
            AppFormRejection::Form(FormRejection::InvalidFormContentType(err)) => {
                format!("Unsupported content type: {}", err)
            }
            AppFormRejection::Form(_) => "Failed to parse form body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
