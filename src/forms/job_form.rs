//! Create-job form shown to company accounts.

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

use crate::net::jobs::parse_skills;
use crate::net::types::JobCreatePayload;

use super::form_state::Form;
use super::rules;

pub const TITLE_REQUIRED: &str = "Job title is required";
pub const DESCRIPTION_REQUIRED: &str = "Job description is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobField {
    Title,
    Description,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    /// Comma-separated, e.g. `"Rust, SQL"`.
    pub skills: String,
    pub requirements: String,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

impl Form for JobForm {
    type Field = JobField;
    type Payload = JobCreatePayload;

    fn required_fields(&self) -> Vec<JobField> {
        vec![JobField::Title, JobField::Description]
    }

    fn validate(&self, field: JobField) -> Option<&'static str> {
        match field {
            JobField::Title => rules::validate_required(&self.title, TITLE_REQUIRED),
            JobField::Description => rules::validate_required(&self.description, DESCRIPTION_REQUIRED),
        }
    }

    fn payload(&self) -> JobCreatePayload {
        JobCreatePayload {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            required_skills: parse_skills(&self.skills),
            requirements: non_blank(&self.requirements),
            ..JobCreatePayload::default()
        }
    }
}
