use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use jobboard_jobs::{ApplicationInput, validate_application};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/applications", post(submit_application))
}

pub async fn submit_application(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ApplicationInput>, JsonRejection>,
) -> axum::response::Response {
    let Ok(Json(input)) = body else {
        return errors::body_rejection();
    };
    let draft = match validate_application(input) {
        Ok(draft) => draft,
        Err(violations) => return errors::validation_error(&violations),
    };

    let application = services.applications.submit(draft);
    (
        StatusCode::CREATED,
        Json(dto::ApplicationResponse::new(application)),
    )
        .into_response()
}
