//! API failure taxonomy and the shared user-facing message contract.
//!
//! ERROR HANDLING
//! ==============
//! Every screen turns a failed call into banner text through
//! [`describe_error`]; no page formats `ApiError` on its own.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Shown when a failure carries neither a server `detail` nor a usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Http { status: u16, body: Option<Value> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("timeout of {0}ms exceeded")]
    Timeout(u32),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-provided `detail` field, if the response body had one.
    ///
    /// Strings are returned as-is. Validation arrays (`[{"msg": ...}, ...]`)
    /// are joined with `"; "`.
    pub fn detail(&self) -> Option<String> {
        let Self::Http { body: Some(body), .. } = self else {
            return None;
        };
        match body.get("detail")? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
            Value::Array(items) => {
                let messages = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>();
                if messages.is_empty() { None } else { Some(messages.join("; ")) }
            }
            _ => None,
        }
    }

    /// Generic failure message. Timeouts have none and fall through to the
    /// generic fallback.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Timeout(_) => None,
            Self::Network(message) if message.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

/// Which half of a browser fetch failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStage {
    /// Sending the request and waiting for headers.
    Send,
    /// Reading the response body.
    Body,
}

impl ApiError {
    /// Classify a raw fetch failure. An abort at either stage is the request
    /// timer firing, so it becomes [`ApiError::Timeout`].
    pub fn from_fetch_failure(stage: FetchStage, message: String, timeout_ms: u32) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("abort") || lowered.contains("timeout") {
            return Self::Timeout(timeout_ms);
        }
        match stage {
            FetchStage::Send => Self::Network(message),
            FetchStage::Body => Self::Decode(message),
        }
    }
}

/// Produce banner text for a failed call: server `detail`, then the generic
/// message, then [`GENERIC_ERROR_MESSAGE`].
pub fn describe_error(err: &ApiError) -> String {
    err.detail()
        .or_else(|| err.message())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}
