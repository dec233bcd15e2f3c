use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use jobboard_jobs::FieldViolation;

use crate::app::services::ServiceError;

/// 400 reporting every failed rule, not just the first.
pub fn validation_error(violations: &[FieldViolation]) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "status": "error",
            "errors": violations,
        })),
    )
        .into_response()
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": "error",
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a service failure to a response.
///
/// Storage failures are logged with their cause and surface as a 500 with the
/// operation's generic message; no internal detail reaches the caller.
pub fn service_error_to_response(
    err: ServiceError,
    not_found_message: &str,
    storage_message: &str,
) -> axum::response::Response {
    match err {
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, not_found_message),
        ServiceError::Storage(e) => {
            tracing::error!(error = %e, "storage failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, storage_message)
        }
        ServiceError::Task(e) => {
            tracing::error!(error = %e, "storage task failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, storage_message)
        }
    }
}

/// 400 for a body the JSON extractor could not produce at all (syntax errors,
/// top-level shape mismatches). Field-level type problems are handled by the
/// validation layer instead, so they come back as field violations.
pub fn body_rejection() -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "Invalid JSON body")
}
