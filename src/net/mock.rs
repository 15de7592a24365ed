//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::client::ApiClient;
use super::config::ApiConfig;
use super::error::ApiError;
use super::session_context::SessionContext;
use super::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Replays queued results in order and records every request it receives.
/// Once the queue is empty every call fails with a network error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_text(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

/// Client against `http://api.test` sharing `session`.
pub fn client_with(transport: &ScriptedTransport, session: &SessionContext) -> ApiClient<ScriptedTransport> {
    ApiClient::new(ApiConfig::with_base_url("http://api.test"), session.clone(), transport.clone())
}
