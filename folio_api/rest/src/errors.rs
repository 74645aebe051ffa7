use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_EMAIL_ADDRESS: &str = "Invalid email address";
pub const FIELD_TOO_LONG: &str = "Field too long";
pub const CONFIGURATION_ERROR: &str = "Server configuration error";
pub const SEND_FAILED: &str = "Failed to send message";
pub const ORIGIN_NOT_ALLOWED: &str = "Origin not allowed";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError { error, details: None })).into_response()
}

pub fn error_with_details(
    code: StatusCode,
    error: &'static str,
    details: impl Into<String>,
) -> Response {
    let details = Some(details.into());
    (code, Json(ApiError { error, details })).into_response()
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
