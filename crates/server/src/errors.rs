use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;

/// Every failure on the group endpoints is a 400; only the body differs.
#[derive(Debug)]
pub enum ApiError {
    /// Plain-text body with the underlying message.
    Message(String),
    /// No body at all.
    Empty,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Message(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Empty => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { ApiError::Message(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self { ApiError::Message(r.body_text()) }
}
