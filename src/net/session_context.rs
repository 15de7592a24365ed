//! Shared bearer-token holder for outgoing requests.
//!
//! DESIGN
//! ======
//! The token is the only mutable state shared between the API client and the
//! session store. Both hold a clone of the same `SessionContext`; the session
//! store writes on login/logout and the client reads on every request. Last
//! writer wins.

#[cfg(test)]
#[path = "session_context_test.rs"]
mod session_context_test;

use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `token` as the default authorization for every later request.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    /// Drop the default authorization.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// `Authorization` header value, when a token is installed.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}
