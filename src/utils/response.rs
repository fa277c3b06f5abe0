use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body. `detail` carries the human-readable message, `code` the
/// machine-readable error kind.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub detail: String,
    pub code: String,
}

pub fn message(message: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: message.into(),
    })
}

pub fn error(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        detail: message.into(),
        code: code.to_string(),
    };

    (status, Json(body)).into_response()
}
