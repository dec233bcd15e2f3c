//! `jobboard-storage` — persistence adapters.
//!
//! The job collection is one JSON document on disk; the application store is
//! in-memory for the lifetime of the process.

pub mod applications;
pub mod file_store;

use jobboard_jobs::Job;
use thiserror::Error;

pub use applications::ApplicationStore;
pub use file_store::{FileJobStore, InMemoryJobStore};

/// Storage failure on save. Loads never fail (see [`JobStore::load`]).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage adapter for the job collection.
///
/// The whole collection is read and written as one document; callers are
/// expected to serialize their mutating load→save spans (the service layer
/// holds a write lock across them).
pub trait JobStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Fails open: a missing, unreadable, or corrupt backing document yields
    /// an empty collection rather than an error. The distinction is logged so
    /// an operator can tell "empty on first run" from "broken storage".
    fn load(&self) -> Vec<Job>;

    /// Overwrite the backing document with the full collection.
    fn save(&self, jobs: &[Job]) -> Result<(), StorageError>;
}
