//! Typed REST client.
//!
//! Centralizes base URL, timeout, credential mode and the default
//! `Authorization` header so endpoint bindings stay one-liners.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config::ApiConfig;
use super::error::ApiError;
use super::session_context::SessionContext;
use super::transport::{FileUpload, HttpRequest, HttpResponse, HttpTransport, Method, RequestBody};

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    session: SessionContext,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(config: ApiConfig, session: SessionContext, transport: T) -> Self {
        Self { config, session, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Token holder shared with the session store.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// # Errors
    ///
    /// Returns the transport failure, a non-2xx `ApiError::Http`, or a decode error.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(self.request(Method::Get, path, RequestBody::Empty)).await
    }

    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`], plus `ApiError::Encode` if `body` fails to serialize.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let payload = encode(body)?;
        self.execute(self.request(Method::Post, path, RequestBody::Json(payload))).await
    }

    /// # Errors
    ///
    /// Same as [`ApiClient::post_json`].
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let payload = encode(body)?;
        self.execute(self.request(Method::Put, path, RequestBody::Json(payload))).await
    }

    /// POST without a body.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`].
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(self.request(Method::Post, path, RequestBody::Empty)).await
    }

    /// POST a single file as multipart form data.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`].
    pub async fn post_file<R: DeserializeOwned>(&self, path: &str, upload: FileUpload) -> Result<R, ApiError> {
        self.execute(self.request(Method::Post, path, RequestBody::Multipart(upload))).await
    }

    fn request(&self, method: Method, path: &str, body: RequestBody) -> HttpRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(authorization) = self.session.authorization_header() {
            headers.push(("Authorization".to_owned(), authorization));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
            with_credentials: self.config.with_credentials,
            timeout_ms: self.config.timeout_ms,
        }
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        decode_response(response)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Encode(err.to_string()))
}

/// Decode a 2xx body as `R`; anything else becomes `ApiError::Http` carrying
/// the JSON body when it parses.
fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        let body = match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("status {} error body is not JSON ({err}): {:.200}", response.status, response.body);
                None
            }
        };
        return Err(ApiError::Http { status: response.status, body });
    }
    let text = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
}
