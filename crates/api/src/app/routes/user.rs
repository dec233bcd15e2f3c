use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::json;

use jobboard_auth::{AuthError, find_user, verify_token};

/// Shared token-verification config.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Arc<String>,
}

/// `GET /api/user` — resolve the caller's profile from their bearer token.
pub async fn profile(
    Extension(auth): Extension<AuthConfig>,
    headers: HeaderMap,
) -> axum::response::Response {
    let claims = match extract_bearer(&headers)
        .ok_or(AuthError::MissingToken)
        .and_then(|token| verify_token(token, auth.jwt_secret.as_bytes()))
    {
        Ok(claims) => claims,
        Err(AuthError::MissingToken) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthorized" })),
            )
                .into_response();
        }
        Err(e) => {
            tracing::debug!(error = %e, "token rejected");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid token" })),
            )
                .into_response();
        }
    };

    match find_user(claims.id) {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "User not found" })),
        )
            .into_response(),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
