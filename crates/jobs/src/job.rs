use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobboard_core::JobId;

/// Default value for `salary` when the request omits it.
pub const DEFAULT_SALARY: &str = "Not specified";
/// Default value for `jobType` when the request omits it.
pub const DEFAULT_JOB_TYPE: &str = "Full-time";
/// Default value for `category` when the request omits it.
pub const DEFAULT_CATEGORY: &str = "General";

/// How candidates apply to a posting.
///
/// Serialized as `{"type": "email" | "link", "value": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ApplicationMethod {
    Email { value: String },
    Link { value: String },
}

impl ApplicationMethod {
    pub fn value(&self) -> &str {
        match self {
            Self::Email { value } | Self::Link { value } => value,
        }
    }
}

/// A posted position record.
///
/// # Invariants
/// - `id` is unique within the collection and immutable after creation.
/// - `created_at` never changes after creation; `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub application_method: ApplicationMethod,
    pub salary: String,
    pub job_type: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a job.
///
/// Produced by [`crate::validate::validate_create`]; the identifier and
/// timestamps are assigned by [`Job::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub application_method: ApplicationMethod,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
}

/// Validated partial update for a job.
///
/// Absent fields (`None`) keep their current value. There is deliberately no
/// way to express a new `id` or `created_at` here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub application_method: Option<ApplicationMethod>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub category: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
}

impl Job {
    /// Materialize a draft into a full record: fresh id, defaults filled,
    /// both timestamps set to `now`.
    pub fn create(draft: JobDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: JobId::new(),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            description: draft.description,
            application_method: draft.application_method,
            salary: draft.salary.unwrap_or_else(|| DEFAULT_SALARY.to_string()),
            job_type: draft.job_type.unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
            category: draft.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            requirements: draft.requirements,
            responsibilities: draft.responsibilities,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow, field-presence-aware merge.
    ///
    /// `id` and `created_at` are never touched; `updated_at` is always
    /// refreshed, even for an empty patch.
    pub fn apply_patch(&mut self, patch: JobPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(method) = patch.application_method {
            self.application_method = method;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(job_type) = patch.job_type {
            self.job_type = job_type;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(requirements) = patch.requirements {
            self.requirements = Some(requirements);
        }
        if let Some(responsibilities) = patch.responsibilities {
            self.responsibilities = Some(responsibilities);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobDraft {
        JobDraft {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            description: "Build things".to_string(),
            application_method: ApplicationMethod::Email {
                value: "hr@acme.com".to_string(),
            },
            salary: None,
            job_type: None,
            category: None,
            requirements: None,
            responsibilities: None,
        }
    }

    #[test]
    fn create_fills_defaults_and_timestamps() {
        let now = Utc::now();
        let job = Job::create(draft(), now);

        assert_eq!(job.salary, DEFAULT_SALARY);
        assert_eq!(job.job_type, DEFAULT_JOB_TYPE);
        assert_eq!(job.category, DEFAULT_CATEGORY);
        assert_eq!(job.created_at, now);
        assert_eq!(job.updated_at, now);
    }

    #[test]
    fn create_keeps_provided_optionals() {
        let now = Utc::now();
        let mut d = draft();
        d.salary = Some("100k".to_string());
        d.requirements = Some(vec!["Rust".to_string()]);
        let job = Job::create(d, now);

        assert_eq!(job.salary, "100k");
        assert_eq!(job.requirements.as_deref(), Some(&["Rust".to_string()][..]));
    }

    #[test]
    fn patch_preserves_id_and_created_at() {
        let created = Utc::now();
        let mut job = Job::create(draft(), created);
        let id = job.id;

        let later = created + chrono::Duration::seconds(5);
        job.apply_patch(
            JobPatch {
                title: Some("Senior Engineer".to_string()),
                ..JobPatch::default()
            },
            later,
        );

        assert_eq!(job.id, id);
        assert_eq!(job.created_at, created);
        assert_eq!(job.updated_at, later);
        assert_eq!(job.title, "Senior Engineer");
        // Untouched fields survive the merge.
        assert_eq!(job.company, "Acme");
    }

    #[test]
    fn empty_patch_still_advances_updated_at() {
        let created = Utc::now();
        let mut job = Job::create(draft(), created);
        let later = created + chrono::Duration::seconds(1);

        job.apply_patch(JobPatch::default(), later);

        assert_eq!(job.updated_at, later);
        assert!(job.updated_at >= job.created_at);
    }

    #[test]
    fn application_method_wire_shape() {
        let m = ApplicationMethod::Link {
            value: "https://acme.com/careers".to_string(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"type": "link", "value": "https://acme.com/careers"})
        );
    }
}
