//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the jobs service (validated orchestration over storage)
//!   and the application intake
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use jobboard_storage::JobStore;

use crate::app::routes::user::AuthConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String, store: Arc<dyn JobStore>) -> Router {
    let services = Arc::new(services::build_services(store));
    let auth = AuthConfig {
        jwt_secret: Arc::new(jwt_secret),
    };

    routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(services))
            .layer(Extension(auth)),
    )
}
