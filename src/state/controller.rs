//! Async driver for the auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages validate input, then hand a typed payload to `AuthController`. The
//! controller owns the API client and session store and walks every flow
//! through the same routine: mark the flow loading, await the binding, then
//! apply the outcome in one state update that also clears `loading`.
//!
//! ERROR HANDLING
//! ==============
//! Transport and server failures become the flow's banner error via
//! `describe_error`. Logout is the exception: its server call is best-effort
//! and the local session is always cleared.
//!
//! INVARIANTS
//! ==========
//! - At most one request per flow is in flight; a second submit while loading
//!   is dropped before any network call.
//! - Once a `sink::ScopedSink`'s liveness is gone, a resolved request changes
//!   nothing: neither view state nor the persisted session.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;

use crate::net::auth;
use crate::net::client::ApiClient;
use crate::net::error::{ApiError, describe_error};
use crate::net::transport::HttpTransport;
use crate::net::types::{
    ForgotPasswordPayload, ResetPasswordPayload, SignInPayload, SignUpPayload, SignUpResponse, VerifyPayload,
};

use super::auth::{AuthState, Flow};
use super::session::SessionStore;
use super::sink::StateSink;
use super::storage::KeyValueStore;

/// Any sink that accepts `AuthState` updates.
pub trait AuthStateSink: StateSink<AuthState> {}

impl<S: StateSink<AuthState>> AuthStateSink for S {}

#[derive(Clone, Debug)]
pub struct AuthController<T, S> {
    client: ApiClient<T>,
    session: SessionStore<S>,
}

impl<T: HttpTransport, S: KeyValueStore> AuthController<T, S> {
    pub fn new(client: ApiClient<T>, session: SessionStore<S>) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Startup state built from whatever session survived the last page load.
    pub fn restore(&self) -> AuthState {
        AuthState::restored(self.session.restore())
    }

    pub async fn sign_in(&self, sink: &impl AuthStateSink, payload: SignInPayload) {
        self.run(sink, Flow::Login, auth::sign_in(&self.client, &payload), |state, response| {
            state.signed_in(self.session.persist(response.into_session()));
        })
        .await;
    }

    /// Register an account. A pending-verification reply moves to the verify
    /// screen; a full auth reply signs the user straight in.
    pub async fn sign_up(&self, sink: &impl AuthStateSink, payload: SignUpPayload) {
        let email = payload.email.clone();
        self.run(sink, Flow::Signup, auth::sign_up(&self.client, &payload), |state, response| match response {
            SignUpResponse::Session(response) => state.signed_in(self.session.persist(response.into_session())),
            SignUpResponse::Pending(reply) => state.awaiting_verification(email, reply.message),
        })
        .await;
    }

    pub async fn verify_email(&self, sink: &impl AuthStateSink, payload: VerifyPayload) {
        self.run(sink, Flow::Verify, auth::verify_email(&self.client, &payload), |state, response| {
            state.signed_in(self.session.persist(response.into_session()));
        })
        .await;
    }

    /// Request a reset link. Stays on the page and shows the server message.
    pub async fn forgot_password(&self, sink: &impl AuthStateSink, payload: ForgotPasswordPayload) {
        self.run(sink, Flow::Forgot, auth::forgot_password(&self.client, &payload), |state, reply| {
            state.status_message = Some(reply.message);
        })
        .await;
    }

    pub async fn reset_password(&self, sink: &impl AuthStateSink, payload: ResetPasswordPayload) {
        self.run(sink, Flow::Reset, auth::reset_password(&self.client, &payload), |state, reply| {
            state.password_reset(reply.message);
        })
        .await;
    }

    /// Confirmed sign-out. The server is told best-effort; the local session
    /// is cleared whatever it answers, even if the view is already gone.
    pub async fn confirm_logout(&self, sink: &impl AuthStateSink) {
        if sink.apply(AuthState::begin_logout) == Some(false) {
            log::debug!("logout already in flight");
            return;
        }
        if let Err(err) = auth::logout(&self.client).await {
            log::warn!("logout request failed, clearing local session anyway: {err}");
        }
        self.session.clear();
        if sink.apply(AuthState::signed_out).is_none() {
            log::debug!("logout finished after teardown");
        }
    }

    async fn run<R>(
        &self,
        sink: &impl AuthStateSink,
        flow: Flow,
        call: impl Future<Output = Result<R, ApiError>>,
        on_success: impl FnOnce(&mut AuthState, R),
    ) {
        if sink.apply(|state| state.begin(flow)) != Some(true) {
            log::debug!("{} request not started", flow.name());
            return;
        }
        let outcome = call.await;
        let applied = sink.apply(|state| match outcome {
            Ok(response) => {
                state.finish(flow);
                on_success(state, response);
            }
            Err(err) => {
                log::warn!("{} request failed: {err}", flow.name());
                state.fail(flow, describe_error(&err));
            }
        });
        if applied.is_none() {
            log::debug!("{} request resolved after teardown; result dropped", flow.name());
        }
    }
}
