//! Response DTOs.
//!
//! Request DTOs live in `jobboard-jobs::validate` next to the rules that
//! check them; these are the success-side response envelopes.

use serde::Serialize;

use jobboard_jobs::{Application, Job, Pagination};

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub status: &'static str,
    pub results: usize,
    pub pagination: Pagination,
    pub data: Vec<Job>,
}

impl JobListResponse {
    pub fn new(data: Vec<Job>, pagination: Pagination) -> Self {
        Self {
            status: "success",
            results: data.len(),
            pagination,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub status: &'static str,
    pub data: Job,
}

impl JobResponse {
    pub fn new(data: Job) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub message: &'static str,
    pub application: Application,
}

impl ApplicationResponse {
    pub fn new(application: Application) -> Self {
        Self {
            message: "Application submitted successfully",
            application,
        }
    }
}
