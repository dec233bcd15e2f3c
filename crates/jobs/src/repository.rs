//! Pure operations over a loaded job collection.
//!
//! Each request loads the collection once, runs one of these operations, and
//! (for mutations) saves the whole collection back. Nothing here does IO.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jobboard_core::JobId;

use crate::job::{Job, JobPatch};

/// Optional list filters; all provided fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl JobFilter {
    /// Case-insensitive substring match on every provided field.
    pub fn matches(&self, job: &Job) -> bool {
        contains_ci(&job.title, self.title.as_deref())
            && contains_ci(&job.company, self.company.as_deref())
            && contains_ci(&job.location, self.location.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub pages: usize,
    pub limit: usize,
}

/// Keep only jobs matching the filter; order is preserved.
pub fn filter(mut jobs: Vec<Job>, f: &JobFilter) -> Vec<Job> {
    jobs.retain(|job| f.matches(job));
    jobs
}

/// Slice out one 1-based page of the collection.
///
/// A page past the end yields an empty slice, not an error. `limit` must be
/// at least 1 (the validation layer guarantees [1, 50]).
pub fn paginate(jobs: Vec<Job>, page: usize, limit: usize) -> (Vec<Job>, Pagination) {
    let total = jobs.len();
    let pagination = Pagination {
        total,
        page,
        pages: total.div_ceil(limit),
        limit,
    };

    let start = (page - 1).saturating_mul(limit).min(total);
    let end = page.saturating_mul(limit).min(total);
    let page_items = jobs[start..end].to_vec();

    (page_items, pagination)
}

/// Find a job by identifier.
pub fn find(jobs: &[Job], id: JobId) -> Option<&Job> {
    jobs.iter().find(|job| job.id == id)
}

fn position(jobs: &[Job], id: JobId) -> Option<usize> {
    jobs.iter().position(|job| job.id == id)
}

/// Append a job; the caller has already assigned id and timestamps.
pub fn insert(jobs: &mut Vec<Job>, job: Job) {
    jobs.push(job);
}

/// Merge a patch onto the job with the given id.
///
/// Returns the updated record, or `None` if the id is unknown.
pub fn update(jobs: &mut [Job], id: JobId, patch: JobPatch, now: DateTime<Utc>) -> Option<Job> {
    let idx = position(jobs, id)?;
    jobs[idx].apply_patch(patch, now);
    Some(jobs[idx].clone())
}

/// Remove the job with the given id, preserving the order of the rest.
pub fn remove(jobs: &mut Vec<Job>, id: JobId) -> Option<Job> {
    let idx = position(jobs, id)?;
    Some(jobs.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{ApplicationMethod, JobDraft};

    fn job(title: &str, company: &str, location: &str) -> Job {
        Job::create(
            JobDraft {
                title: title.to_string(),
                company: company.to_string(),
                location: location.to_string(),
                description: "desc".to_string(),
                application_method: ApplicationMethod::Email {
                    value: "hr@example.com".to_string(),
                },
                salary: None,
                job_type: None,
                category: None,
                requirements: None,
                responsibilities: None,
            },
            Utc::now(),
        )
    }

    fn sample() -> Vec<Job> {
        vec![
            job("Backend Engineer", "Acme", "New York"),
            job("Frontend Engineer", "Globex", "Berlin"),
            job("Data Scientist", "Acme", "Remote"),
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let out = filter(
            sample(),
            &JobFilter {
                title: Some("ENGINEER".to_string()),
                ..JobFilter::default()
            },
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn combined_filters_intersect() {
        let out = filter(
            sample(),
            &JobFilter {
                title: Some("engineer".to_string()),
                company: Some("acme".to_string()),
                ..JobFilter::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Backend Engineer");
    }

    #[test]
    fn absent_filters_are_noops() {
        let out = filter(sample(), &JobFilter::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn paginate_math() {
        let (page_items, p) = paginate(sample(), 1, 2);
        assert_eq!(page_items.len(), 2);
        assert_eq!(p.total, 3);
        assert_eq!(p.pages, 2);
        assert_eq!(p.limit, 2);

        let (page_items, p) = paginate(sample(), 2, 2);
        assert_eq!(page_items.len(), 1);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn page_past_end_is_empty_not_error() {
        let (page_items, p) = paginate(sample(), 7, 10);
        assert!(page_items.is_empty());
        assert_eq!(p.total, 3);
        assert_eq!(p.pages, 1);
    }

    #[test]
    fn paginate_empty_collection() {
        let (page_items, p) = paginate(Vec::new(), 1, 10);
        assert!(page_items.is_empty());
        assert_eq!(p.total, 0);
        assert_eq!(p.pages, 0);
    }

    #[test]
    fn find_unknown_id_is_none() {
        let jobs = sample();
        assert!(find(&jobs, JobId::new()).is_none());
    }

    #[test]
    fn update_unknown_id_is_none() {
        let mut jobs = sample();
        assert!(update(&mut jobs, JobId::new(), JobPatch::default(), Utc::now()).is_none());
    }

    #[test]
    fn remove_preserves_order_and_shrinks_by_one() {
        let mut jobs = sample();
        let id = jobs[1].id;

        let removed = remove(&mut jobs, id).unwrap();

        assert_eq!(removed.title, "Frontend Engineer");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[1].title, "Data Scientist");
        assert!(find(&jobs, id).is_none());
    }
}
