//! In-memory application store.
//!
//! Applications are create-only and live for the lifetime of the process;
//! they are not part of the persisted jobs document.

use std::sync::RwLock;

use jobboard_jobs::Application;

#[derive(Debug, Default)]
pub struct ApplicationStore {
    applications: RwLock<Vec<Application>>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted application.
    pub fn append(&self, application: Application) {
        self.applications
            .write()
            .expect("application store lock poisoned")
            .push(application);
    }

    /// Snapshot of everything submitted so far, in submission order.
    pub fn list(&self) -> Vec<Application> {
        self.applications
            .read()
            .expect("application store lock poisoned")
            .clone()
    }
}
