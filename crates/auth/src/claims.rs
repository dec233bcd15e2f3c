use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims the job board expects: the caller's user id plus expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Caller's user id.
    pub id: u64,
    /// Expiration, seconds since the epoch.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Decode and verify an HS256 token against the shared secret.
///
/// Expiry is enforced by the decoder; any signature, shape, or expiry problem
/// comes back as [`AuthError::InvalidToken`].
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}
