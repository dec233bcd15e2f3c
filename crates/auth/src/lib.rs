//! `jobboard-auth` — bearer-token verification boundary.
//!
//! This crate is intentionally decoupled from HTTP: it decodes and validates
//! tokens and resolves caller profiles, nothing more. Extracting the token
//! from a request belongs to the API layer.

pub mod claims;
pub mod profile;

pub use claims::{AuthError, Claims, verify_token};
pub use profile::{UserProfile, find_user};
