//! Profile endpoint.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::ProfileUpdatePayload;

/// `PUT /users/me/profile`. The response shape is server-defined and returned untyped.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn update_profile<T: HttpTransport>(client: &ApiClient<T>, payload: &ProfileUpdatePayload) -> Result<Value, ApiError> {
    client.put_json("/users/me/profile", payload).await
}
