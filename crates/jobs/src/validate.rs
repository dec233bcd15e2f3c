//! Request validation, ahead of any storage access.
//!
//! Input types are deliberately loose (every field optional, values as raw
//! JSON) so that a single pass can report *all* failing fields together
//! instead of stopping at the first — including fields carrying the wrong
//! JSON type, which never get the chance to fail typed deserialization. A
//! request that fails validation never reaches the storage adapter.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ApplicationDraft;
use crate::job::{ApplicationMethod, JobDraft, JobPatch};
use crate::repository::JobFilter;

/// 1-based page default for list requests.
pub const DEFAULT_PAGE: usize = 1;
/// Page size default for list requests.
pub const DEFAULT_LIMIT: usize = 10;
/// Upper bound on the page size.
pub const MAX_LIMIT: usize = 50;

// Structural check only: something@something.tld, no whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single failed validation rule, reported by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Raw create/update body for a job.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub title: Option<Value>,
    pub company: Option<Value>,
    pub location: Option<Value>,
    pub description: Option<Value>,
    pub application_method: Option<Value>,
    pub salary: Option<Value>,
    pub job_type: Option<Value>,
    pub category: Option<Value>,
    pub requirements: Option<Value>,
    pub responsibilities: Option<Value>,
}

/// Raw list query parameters. `page`/`limit` arrive as text and are parsed
/// here so a bad value is reported like any other field violation.
#[derive(Debug, Default, Deserialize)]
pub struct ListInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated list query: filters plus clamped pagination inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: JobFilter,
    pub page: usize,
    pub limit: usize,
}

/// Raw application submission body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub job_id: Option<Value>,
    pub applicant_name: Option<Value>,
    pub applicant_email: Option<Value>,
    pub resume: Option<Value>,
}

pub fn validate_create(input: JobInput) -> Result<JobDraft, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = required_text(&mut violations, "title", "Job title is required", &input.title);
    let company = required_text(
        &mut violations,
        "company",
        "Company name is required",
        &input.company,
    );
    let location = required_text(
        &mut violations,
        "location",
        "Location is required",
        &input.location,
    );
    let description = required_text(
        &mut violations,
        "description",
        "Job description is required",
        &input.description,
    );
    let application_method = required_method(&mut violations, input.application_method.as_ref());

    // Optional text: blank collapses to absent so defaults still apply.
    let salary = optional_text(
        &mut violations,
        "salary",
        "Salary must be a string",
        &input.salary,
    );
    let job_type = optional_text(
        &mut violations,
        "jobType",
        "Job type must be a string",
        &input.job_type,
    );
    let category = optional_text(
        &mut violations,
        "category",
        "Category must be a string",
        &input.category,
    );

    let requirements = string_sequence(
        &mut violations,
        "requirements",
        "Requirements must be an array",
        input.requirements.as_ref(),
    );
    let responsibilities = string_sequence(
        &mut violations,
        "responsibilities",
        "Responsibilities must be an array",
        input.responsibilities.as_ref(),
    );

    match (title, company, location, description, application_method) {
        (Some(title), Some(company), Some(location), Some(description), Some(application_method))
            if violations.is_empty() =>
        {
            Ok(JobDraft {
                title,
                company,
                location,
                description,
                application_method,
                salary,
                job_type,
                category,
                requirements,
                responsibilities,
            })
        }
        _ => Err(violations),
    }
}

pub fn validate_update(input: JobInput) -> Result<JobPatch, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let patch = JobPatch {
        title: present_text(&mut violations, "title", "Job title is required", &input.title),
        company: present_text(
            &mut violations,
            "company",
            "Company name is required",
            &input.company,
        ),
        location: present_text(
            &mut violations,
            "location",
            "Location is required",
            &input.location,
        ),
        description: present_text(
            &mut violations,
            "description",
            "Job description is required",
            &input.description,
        ),
        application_method: match input.application_method.as_ref() {
            None | Some(Value::Null) => None,
            Some(Value::Object(method)) => parse_method(&mut violations, method),
            Some(_) => {
                violations.push(FieldViolation::new(
                    "applicationMethod",
                    "Application method must be an object",
                ));
                None
            }
        },
        salary: patch_text(
            &mut violations,
            "salary",
            "Salary must be a string",
            &input.salary,
        ),
        job_type: patch_text(
            &mut violations,
            "jobType",
            "Job type must be a string",
            &input.job_type,
        ),
        category: patch_text(
            &mut violations,
            "category",
            "Category must be a string",
            &input.category,
        ),
        requirements: string_sequence(
            &mut violations,
            "requirements",
            "Requirements must be an array",
            input.requirements.as_ref(),
        ),
        responsibilities: string_sequence(
            &mut violations,
            "responsibilities",
            "Responsibilities must be an array",
            input.responsibilities.as_ref(),
        ),
    };

    if violations.is_empty() {
        Ok(patch)
    } else {
        Err(violations)
    }
}

pub fn validate_list(input: ListInput) -> Result<ListQuery, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let filter = JobFilter {
        title: free_text(&input.title),
        company: free_text(&input.company),
        location: free_text(&input.location),
    };

    let page = match input.page.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_PAGE,
        Some(raw) => match raw.parse::<usize>() {
            Ok(page) if page >= 1 => page,
            _ => {
                violations.push(FieldViolation::new("page", "Page must be a positive integer"));
                DEFAULT_PAGE
            }
        },
    };

    let limit = match input.limit.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_LIMIT,
        Some(raw) => match raw.parse::<usize>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
            _ => {
                violations.push(FieldViolation::new(
                    "limit",
                    "Limit must be an integer between 1 and 50",
                ));
                DEFAULT_LIMIT
            }
        },
    };

    if violations.is_empty() {
        Ok(ListQuery { filter, page, limit })
    } else {
        Err(violations)
    }
}

pub fn validate_id(id: &str) -> Result<(), Vec<FieldViolation>> {
    if id.trim().is_empty() {
        return Err(vec![FieldViolation::new("id", "Job ID is required")]);
    }
    Ok(())
}

pub fn validate_application(input: ApplicationInput) -> Result<ApplicationDraft, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let job_id = required_text(&mut violations, "jobId", "Job ID is required", &input.job_id);
    let applicant_name = required_text(
        &mut violations,
        "applicantName",
        "Applicant name is required",
        &input.applicant_name,
    );

    let applicant_email = match text_value(input.applicant_email.as_ref()) {
        TextValue::Text(email) if EMAIL_RE.is_match(email) => Some(email.to_string()),
        _ => {
            violations.push(FieldViolation::new("applicantEmail", "Valid email is required"));
            None
        }
    };

    let resume = required_text(&mut violations, "resume", "Resume is required", &input.resume);

    match (job_id, applicant_name, applicant_email, resume) {
        (Some(job_id), Some(applicant_name), Some(applicant_email), Some(resume))
            if violations.is_empty() =>
        {
            Ok(ApplicationDraft {
                job_id,
                applicant_name,
                applicant_email,
                resume,
            })
        }
        _ => Err(violations),
    }
}

/// A scalar field as it arrived on the wire: absent (or `null`), trimmed
/// text, or some other JSON type entirely.
enum TextValue<'a> {
    Missing,
    Wrong,
    Text(&'a str),
}

fn text_value(value: Option<&Value>) -> TextValue<'_> {
    match value {
        None | Some(Value::Null) => TextValue::Missing,
        Some(Value::String(s)) => TextValue::Text(s.trim()),
        Some(_) => TextValue::Wrong,
    }
}

/// Required non-empty text: missing, blank-after-trim, or non-string is a
/// violation of the field's one rule.
fn required_text(
    out: &mut Vec<FieldViolation>,
    field: &str,
    message: &str,
    value: &Option<Value>,
) -> Option<String> {
    match text_value(value.as_ref()) {
        TextValue::Text(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            out.push(FieldViolation::new(field, message));
            None
        }
    }
}

/// Optional text with the non-empty constraint when present (update bodies).
fn present_text(
    out: &mut Vec<FieldViolation>,
    field: &str,
    message: &str,
    value: &Option<Value>,
) -> Option<String> {
    match text_value(value.as_ref()) {
        TextValue::Missing => None,
        TextValue::Text(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            out.push(FieldViolation::new(field, message));
            None
        }
    }
}

/// Free-form optional text on a create body: trimmed, blank collapses to
/// absent; a non-string is a violation.
fn optional_text(
    out: &mut Vec<FieldViolation>,
    field: &str,
    message: &str,
    value: &Option<Value>,
) -> Option<String> {
    match text_value(value.as_ref()) {
        TextValue::Missing => None,
        TextValue::Text(v) if v.is_empty() => None,
        TextValue::Text(v) => Some(v.to_string()),
        TextValue::Wrong => {
            out.push(FieldViolation::new(field, message));
            None
        }
    }
}

/// Free-form optional text on an update body: a present blank is kept as
/// blank (the patch overwrites); a non-string is a violation.
fn patch_text(
    out: &mut Vec<FieldViolation>,
    field: &str,
    message: &str,
    value: &Option<Value>,
) -> Option<String> {
    match text_value(value.as_ref()) {
        TextValue::Missing => None,
        TextValue::Text(v) => Some(v.to_string()),
        TextValue::Wrong => {
            out.push(FieldViolation::new(field, message));
            None
        }
    }
}

/// Free-form optional text from query parameters.
fn free_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_method(
    out: &mut Vec<FieldViolation>,
    input: Option<&Value>,
) -> Option<ApplicationMethod> {
    match input {
        None | Some(Value::Null) => {
            out.push(FieldViolation::new(
                "applicationMethod",
                "Application method is required",
            ));
            None
        }
        Some(Value::Object(method)) => parse_method(out, method),
        Some(_) => {
            out.push(FieldViolation::new(
                "applicationMethod",
                "Application method must be an object",
            ));
            None
        }
    }
}

fn parse_method(
    out: &mut Vec<FieldViolation>,
    method: &serde_json::Map<String, Value>,
) -> Option<ApplicationMethod> {
    let kind = match text_value(method.get("type")) {
        TextValue::Text(k @ ("email" | "link")) => Some(k),
        _ => {
            out.push(FieldViolation::new(
                "applicationMethod.type",
                "Application method must be email or link",
            ));
            None
        }
    };

    let value = match text_value(method.get("value")) {
        TextValue::Text(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            out.push(FieldViolation::new(
                "applicationMethod.value",
                "Application method value is required",
            ));
            None
        }
    };

    match (kind, value) {
        (Some("email"), Some(value)) => Some(ApplicationMethod::Email { value }),
        (Some("link"), Some(value)) => Some(ApplicationMethod::Link { value }),
        _ => None,
    }
}

fn string_sequence(
    out: &mut Vec<FieldViolation>,
    field: &str,
    message: &str,
    value: Option<&Value>,
) -> Option<Vec<String>> {
    let items = match value {
        None => return None,
        Some(Value::Array(items)) => items,
        Some(_) => {
            out.push(FieldViolation::new(field, message));
            return None;
        }
    };

    let mut seq = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => seq.push(s.clone()),
            _ => {
                out.push(FieldViolation::new(field, message));
                return None;
            }
        }
    }
    Some(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_input() -> JobInput {
        JobInput {
            title: Some(json!("Engineer")),
            company: Some(json!("Acme")),
            location: Some(json!("NYC")),
            description: Some(json!("Build things")),
            application_method: Some(json!({ "type": "email", "value": "hr@acme.com" })),
            ..JobInput::default()
        }
    }

    #[test]
    fn valid_create_passes() {
        let draft = validate_create(create_input()).unwrap();
        assert_eq!(draft.title, "Engineer");
        assert_eq!(
            draft.application_method,
            ApplicationMethod::Email {
                value: "hr@acme.com".to_string()
            }
        );
        assert!(draft.salary.is_none());
    }

    #[test]
    fn empty_body_reports_every_missing_field() {
        let violations = validate_create(JobInput::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["title", "company", "location", "description", "applicationMethod"]
        );
    }

    #[test]
    fn wrongly_typed_scalars_are_reported_by_field() {
        let mut input = create_input();
        input.title = Some(json!(123));
        input.salary = Some(json!(50000));

        let violations = validate_create(input).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "salary"]);
    }

    #[test]
    fn null_counts_as_absent() {
        let mut input = create_input();
        input.salary = Some(json!(null));
        let draft = validate_create(input).unwrap();
        assert!(draft.salary.is_none());

        let mut input = create_input();
        input.title = Some(json!(null));
        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn method_must_be_an_object() {
        let mut input = create_input();
        input.application_method = Some(json!("email"));

        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "applicationMethod");
        assert_eq!(violations[0].message, "Application method must be an object");
    }

    #[test]
    fn invalid_method_type_is_reported_by_name() {
        let mut input = create_input();
        input.application_method =
            Some(json!({ "type": "carrier-pigeon", "value": "coop 7" }));

        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "applicationMethod.type");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut input = create_input();
        input.title = Some(json!("   "));

        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn blank_salary_collapses_to_default() {
        let mut input = create_input();
        input.salary = Some(json!("  "));

        let draft = validate_create(input).unwrap();
        assert!(draft.salary.is_none());
    }

    #[test]
    fn requirements_must_be_an_array_of_strings() {
        let mut input = create_input();
        input.requirements = Some(json!("not an array"));
        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations[0].field, "requirements");

        let mut input = create_input();
        input.requirements = Some(json!(["Rust", 42]));
        let violations = validate_create(input).unwrap_err();
        assert_eq!(violations[0].field, "requirements");

        let mut input = create_input();
        input.requirements = Some(json!(["Rust", "Axum"]));
        let draft = validate_create(input).unwrap();
        assert_eq!(
            draft.requirements,
            Some(vec!["Rust".to_string(), "Axum".to_string()])
        );
    }

    #[test]
    fn update_accepts_empty_body() {
        let patch = validate_update(JobInput::default()).unwrap();
        assert_eq!(patch, JobPatch::default());
    }

    #[test]
    fn update_rejects_blank_required_fields_when_present() {
        let input = JobInput {
            title: Some(json!("")),
            ..JobInput::default()
        };
        let violations = validate_update(input).unwrap_err();
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn update_rejects_wrongly_typed_fields() {
        let input = JobInput {
            title: Some(json!(["not", "text"])),
            salary: Some(json!(true)),
            ..JobInput::default()
        };
        let violations = validate_update(input).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "salary"]);
    }

    #[test]
    fn update_keeps_a_present_blank_optional() {
        let input = JobInput {
            salary: Some(json!("  ")),
            ..JobInput::default()
        };
        let patch = validate_update(input).unwrap();
        assert_eq!(patch.salary.as_deref(), Some(""));
    }

    #[test]
    fn list_defaults_and_bounds() {
        let q = validate_list(ListInput::default()).unwrap();
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);

        let violations = validate_list(ListInput {
            page: Some("0".to_string()),
            limit: Some("51".to_string()),
            ..ListInput::default()
        })
        .unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["page", "limit"]);

        let violations = validate_list(ListInput {
            page: Some("abc".to_string()),
            ..ListInput::default()
        })
        .unwrap_err();
        assert_eq!(violations[0].field, "page");
    }

    #[test]
    fn application_requires_all_fields_and_email_shape() {
        let violations = validate_application(ApplicationInput::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["jobId", "applicantName", "applicantEmail", "resume"]);

        let violations = validate_application(ApplicationInput {
            job_id: Some(json!("j1")),
            applicant_name: Some(json!("Ada")),
            applicant_email: Some(json!("not-an-email")),
            resume: Some(json!("https://example.com/cv.pdf")),
        })
        .unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "applicantEmail");

        let violations = validate_application(ApplicationInput {
            job_id: Some(json!(7)),
            applicant_name: Some(json!("Ada")),
            applicant_email: Some(json!("ada@example.com")),
            resume: Some(json!("https://example.com/cv.pdf")),
        })
        .unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "jobId");

        let draft = validate_application(ApplicationInput {
            job_id: Some(json!("j1")),
            applicant_name: Some(json!("Ada")),
            applicant_email: Some(json!("ada@example.com")),
            resume: Some(json!("https://example.com/cv.pdf")),
        })
        .unwrap();
        assert_eq!(draft.applicant_email, "ada@example.com");
    }
}
