//! Resume endpoints.

#[cfg(test)]
#[path = "resumes_test.rs"]
mod resumes_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{FileUpload, HttpTransport};
use super::types::{ResumeListResponse, ResumeOut};

/// Multipart field name the upload endpoint reads.
const UPLOAD_FIELD: &str = "file";

fn parse_resume_endpoint(resume_id: &str) -> String {
    format!("/resumes/{resume_id}/parse")
}

/// `GET /resumes`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn list_resumes<T: HttpTransport>(client: &ApiClient<T>) -> Result<ResumeListResponse, ApiError> {
    client.get_json("/resumes").await
}

/// `POST /resumes/upload` with the file as multipart field `file`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn upload_resume<T: HttpTransport>(
    client: &ApiClient<T>,
    file_name: &str,
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<ResumeOut, ApiError> {
    let upload = FileUpload {
        field: UPLOAD_FIELD.to_owned(),
        file_name: file_name.to_owned(),
        content_type: content_type.map(str::to_owned),
        bytes,
    };
    client.post_file("/resumes/upload", upload).await
}

/// `POST /resumes/{id}/parse`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn parse_resume<T: HttpTransport>(client: &ApiClient<T>, resume_id: &str) -> Result<ResumeOut, ApiError> {
    client.post_empty(&parse_resume_endpoint(resume_id)).await
}
