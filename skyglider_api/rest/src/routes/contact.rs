use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use skyglider_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use crate::{
    errors::{error, internal_server_error, INVALID_SUBMISSION_DETAIL, UNREADABLE_REQUEST_DETAIL},
    models::contact::{parse_contact_payload, ApiContactAccepted, ApiContactRejected},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .layer(DefaultBodyLimit::disable())
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            debug!("failed to read contact submission body: {err}");
            return error(StatusCode::BAD_REQUEST, UNREADABLE_REQUEST_DETAIL);
        }
    };

    let payload = match parse_contact_payload(&body) {
        Ok(payload) => payload,
        Err(err) => {
            debug!("unreadable contact submission: {err}");
            return error(StatusCode::BAD_REQUEST, UNREADABLE_REQUEST_DETAIL);
        }
    };

    match service.submit(payload).await {
        Ok(record) => Json(ApiContactAccepted::from(record)).into_response(),
        Err(ContactSubmitError::Rejected(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiContactRejected {
                detail: INVALID_SUBMISSION_DETAIL,
                errors: errors.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
