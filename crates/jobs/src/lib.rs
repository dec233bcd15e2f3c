//! Jobs domain module (postings and applications).
//!
//! This crate contains the business rules for job postings and application
//! intake, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). The repository operations work on an already-loaded
//! collection; persistence lives in `jobboard-storage`.

pub mod application;
pub mod job;
pub mod repository;
pub mod validate;

pub use application::{Application, ApplicationDraft};
pub use job::{ApplicationMethod, Job, JobDraft, JobPatch};
pub use repository::{JobFilter, Pagination};
pub use validate::{
    ApplicationInput, FieldViolation, JobInput, ListInput, ListQuery, validate_application,
    validate_create, validate_id, validate_list, validate_update,
};
