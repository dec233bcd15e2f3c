//! File-backed job store: one pretty-printed JSON array per deployment.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use jobboard_jobs::Job;

use crate::{JobStore, StorageError};

/// Canonical store: the job collection as a single JSON file.
#[derive(Debug)]
pub struct FileJobStore {
    path: PathBuf,
}

impl FileJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl JobStore for FileJobStore {
    fn load(&self) -> Vec<Job> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "jobs file absent, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "jobs file unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(jobs) => jobs,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "jobs file corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&self, jobs: &[Job]) -> Result<(), StorageError> {
        self.ensure_parent_dir()?;
        let raw = serde_json::to_string_pretty(jobs)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory job store for tests and development.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobStore for InMemoryJobStore {
    fn load(&self) -> Vec<Job> {
        self.jobs.read().expect("job store lock poisoned").clone()
    }

    fn save(&self, jobs: &[Job]) -> Result<(), StorageError> {
        *self.jobs.write().expect("job store lock poisoned") = jobs.to_vec();
        Ok(())
    }
}
