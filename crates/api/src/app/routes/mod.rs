use axum::{Router, routing::get};

pub mod applications;
pub mod jobs;
pub mod system;
pub mod user;

/// Full routing tree.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/jobs", jobs::router().merge(applications::router()))
        .route("/api/user", get(user::profile))
}
