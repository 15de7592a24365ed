//! HTTP round-trip abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds fully-resolved [`HttpRequest`]s and hands them to a
//! transport. The browser build sends them with `gloo-net` (`fetch`
//! module); native builds get [`OfflineTransport`], which fails every call,
//! since these endpoints are only meaningful in the browser.

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A file attached as a single multipart form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Pre-serialized JSON text.
    Json(String),
    Multipart(FileUpload),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub with_credentials: bool,
    pub timeout_ms: u32,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and yields the raw response.
///
/// Implementations report transport-level failures (`Network`, `Timeout`)
/// only; non-2xx statuses are returned as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for non-browser builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl HttpTransport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network(format!("{} is not available outside the browser", request.url)))
    }
}

#[cfg(feature = "csr")]
pub type DefaultTransport = super::fetch::FetchTransport;
#[cfg(not(feature = "csr"))]
pub type DefaultTransport = OfflineTransport;
