//! Caller profile directory.
//!
//! A fixed in-process directory stands in for a real identity service; the
//! token only carries the user id, the profile comes from here.

use serde::Serialize;

/// Public profile of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Resolve a user id from a verified token to a profile.
pub fn find_user(id: u64) -> Option<UserProfile> {
    directory().into_iter().find(|user| user.id == id)
}

fn directory() -> Vec<UserProfile> {
    vec![UserProfile {
        id: 1,
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    }]
}
