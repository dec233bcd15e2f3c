use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use jobboard_jobs::{
    JobInput, ListInput, validate_create, validate_id, validate_list, validate_update,
};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
}

pub async fn list_jobs(
    Extension(services): Extension<Arc<AppServices>>,
    Query(input): Query<ListInput>,
) -> axum::response::Response {
    let query = match validate_list(input) {
        Ok(query) => query,
        Err(violations) => return errors::validation_error(&violations),
    };

    match services.jobs.list(query).await {
        Ok((data, pagination)) => (
            StatusCode::OK,
            Json(dto::JobListResponse::new(data, pagination)),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e, "Job not found", "Failed to retrieve jobs"),
    }
}

pub async fn get_job(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(violations) = validate_id(&id) {
        return errors::validation_error(&violations);
    }

    match services.jobs.get(&id).await {
        Ok(job) => (StatusCode::OK, Json(dto::JobResponse::new(job))).into_response(),
        Err(e) => errors::service_error_to_response(e, "Job not found", "Failed to retrieve job"),
    }
}

pub async fn create_job(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<JobInput>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(input)) = body else {
        return errors::body_rejection();
    };
    let draft = match validate_create(input) {
        Ok(draft) => draft,
        Err(violations) => return errors::validation_error(&violations),
    };

    match services.jobs.create(draft).await {
        Ok(job) => (StatusCode::CREATED, Json(dto::JobResponse::new(job))).into_response(),
        Err(e) => errors::service_error_to_response(e, "Job not found", "Failed to create job"),
    }
}

pub async fn update_job(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<JobInput>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(input)) = body else {
        return errors::body_rejection();
    };
    let mut violations = validate_id(&id).err().unwrap_or_default();
    let patch = match validate_update(input) {
        Ok(patch) => patch,
        Err(mut more) => {
            violations.append(&mut more);
            return errors::validation_error(&violations);
        }
    };
    if !violations.is_empty() {
        return errors::validation_error(&violations);
    }

    match services.jobs.update(&id, patch).await {
        Ok(job) => (StatusCode::OK, Json(dto::JobResponse::new(job))).into_response(),
        Err(e) => errors::service_error_to_response(e, "Job not found", "Failed to update job"),
    }
}

pub async fn delete_job(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(violations) = validate_id(&id) {
        return errors::validation_error(&violations);
    }

    match services.jobs.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(dto::MessageResponse::new("Job deleted successfully")),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e, "Job not found", "Failed to delete job"),
    }
}
