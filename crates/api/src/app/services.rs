//! Service layer: validated orchestration over the storage adapter.
//!
//! Per-request flow is load → operate → (save) → respond, terminal on first
//! failure. Validation has already happened in the handlers; nothing here is
//! reached with malformed input.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use jobboard_core::JobId;
use jobboard_jobs::{
    Application, ApplicationDraft, Job, JobDraft, JobPatch, ListQuery, Pagination, repository,
};
use jobboard_storage::{ApplicationStore, JobStore, StorageError};

/// Everything the handlers need, shared via `Extension`.
pub struct AppServices {
    pub jobs: JobsService,
    pub applications: ApplicationIntake,
}

pub fn build_services(store: Arc<dyn JobStore>) -> AppServices {
    AppServices {
        jobs: JobsService::new(store),
        applications: ApplicationIntake::new(),
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("job not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("storage task failed")]
    Task(#[from] tokio::task::JoinError),
}

/// Orchestrates the Jobs resource: owns ID generation and timestamping.
pub struct JobsService {
    store: Arc<dyn JobStore>,
    /// Serializes every mutating load→save span. Create/update/delete are
    /// mutually exclusive with each other; reads bypass the lock and may
    /// observe either side of an in-flight write.
    write_lock: Mutex<()>,
}

impl JobsService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<(Vec<Job>, Pagination), ServiceError> {
        let jobs = self.load().await?;
        let jobs = repository::filter(jobs, &query.filter);
        Ok(repository::paginate(jobs, query.page, query.limit))
    }

    pub async fn get(&self, id: &str) -> Result<Job, ServiceError> {
        let id = parse_job_id(id)?;
        let jobs = self.load().await?;
        repository::find(&jobs, id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, draft: JobDraft) -> Result<Job, ServiceError> {
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.load().await?;
        let job = Job::create(draft, Utc::now());
        repository::insert(&mut jobs, job.clone());
        self.save(jobs).await?;

        tracing::info!(id = %job.id, title = %job.title, "job created");
        Ok(job)
    }

    pub async fn update(&self, id: &str, patch: JobPatch) -> Result<Job, ServiceError> {
        let id = parse_job_id(id)?;
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.load().await?;
        let job =
            repository::update(&mut jobs, id, patch, Utc::now()).ok_or(ServiceError::NotFound)?;
        self.save(jobs).await?;

        tracing::info!(id = %job.id, "job updated");
        Ok(job)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_job_id(id)?;
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.load().await?;
        repository::remove(&mut jobs, id).ok_or(ServiceError::NotFound)?;
        self.save(jobs).await?;

        tracing::info!(id = %id, "job deleted");
        Ok(())
    }

    // The store does blocking file IO; keep it off the async workers.

    async fn load(&self) -> Result<Vec<Job>, ServiceError> {
        let store = Arc::clone(&self.store);
        Ok(tokio::task::spawn_blocking(move || store.load()).await?)
    }

    async fn save(&self, jobs: Vec<Job>) -> Result<(), ServiceError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.save(&jobs)).await??;
        Ok(())
    }
}

/// Ids are opaque on the wire; anything that is not one of ours cannot match
/// a record, so a malformed id is just a miss.
fn parse_job_id(id: &str) -> Result<JobId, ServiceError> {
    id.parse().map_err(|_| ServiceError::NotFound)
}

/// Application intake: create-only, in-memory for process lifetime.
///
/// `job_id` is deliberately not cross-checked against the job collection.
pub struct ApplicationIntake {
    store: ApplicationStore,
}

impl ApplicationIntake {
    pub fn new() -> Self {
        Self {
            store: ApplicationStore::new(),
        }
    }

    pub fn submit(&self, draft: ApplicationDraft) -> Application {
        let application = Application::create(draft);
        self.store.append(application.clone());
        tracing::info!(id = %application.id, job_id = %application.job_id, "application submitted");
        application
    }

    pub fn list(&self) -> Vec<Application> {
        self.store.list()
    }
}

impl Default for ApplicationIntake {
    fn default() -> Self {
        Self::new()
    }
}
