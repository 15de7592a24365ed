//! Auth endpoint bindings.
//!
//! Thin wrappers: no validation, no state. Callers own loading/error display
//! and must never log the payloads (they carry passwords and tokens).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::{
    AuthResponse, ForgotPasswordPayload, MessageResponse, ResetPasswordPayload, SignInPayload, SignUpPayload,
    SignUpResponse, VerifyPayload,
};

/// `POST /auth/login`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn sign_in<T: HttpTransport>(client: &ApiClient<T>, payload: &SignInPayload) -> Result<AuthResponse, ApiError> {
    client.post_json("/auth/login", payload).await
}

/// `POST /auth/register`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn sign_up<T: HttpTransport>(client: &ApiClient<T>, payload: &SignUpPayload) -> Result<SignUpResponse, ApiError> {
    client.post_json("/auth/register", payload).await
}

/// `POST /auth/verify-email`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn verify_email<T: HttpTransport>(client: &ApiClient<T>, payload: &VerifyPayload) -> Result<AuthResponse, ApiError> {
    client.post_json("/auth/verify-email", payload).await
}

/// `POST /auth/forgot-password`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn forgot_password<T: HttpTransport>(
    client: &ApiClient<T>,
    payload: &ForgotPasswordPayload,
) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/forgot-password", payload).await
}

/// `POST /auth/reset-password`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn reset_password<T: HttpTransport>(
    client: &ApiClient<T>,
    payload: &ResetPasswordPayload,
) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/reset-password", payload).await
}

/// `POST /auth/logout`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn logout<T: HttpTransport>(client: &ApiClient<T>) -> Result<MessageResponse, ApiError> {
    client.post_empty("/auth/logout").await
}
