//! Job posting endpoints.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::{JobCreatePayload, JobOut};

/// `GET /jobs/`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn list_jobs<T: HttpTransport>(client: &ApiClient<T>) -> Result<Vec<JobOut>, ApiError> {
    client.get_json("/jobs/").await
}

/// `POST /jobs/`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn create_job<T: HttpTransport>(client: &ApiClient<T>, payload: &JobCreatePayload) -> Result<JobOut, ApiError> {
    client.post_json("/jobs/", payload).await
}

/// Split a comma-separated skill list into trimmed, lower-cased, de-duplicated entries.
pub fn parse_skills(input: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let skill = skill.to_lowercase();
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}
