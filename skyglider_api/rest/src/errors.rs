use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";
pub const UNREADABLE_REQUEST_DETAIL: &str = "Unreadable request";
pub const INVALID_SUBMISSION_DETAIL: &str = "Invalid submission";

/// Log `err` and answer with a generic 500 that does not leak any details.
pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_DETAIL)
}

pub fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
