use serde::{Deserialize, Serialize};

use jobboard_core::ApplicationId;

/// A candidate's submission against a job posting.
///
/// `job_id` is a plain string, not a foreign key: the intake flow does not
/// cross-check it against the job collection, so dangling references are
/// tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume: String,
}

/// Validated input for submitting an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub job_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub resume: String,
}

impl Application {
    pub fn create(draft: ApplicationDraft) -> Self {
        Self {
            id: ApplicationId::new(),
            job_id: draft.job_id,
            applicant_name: draft.applicant_name,
            applicant_email: draft.applicant_email,
            resume: draft.resume,
        }
    }
}
