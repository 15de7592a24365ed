//! Auth view-state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` decides which screen is visible and owns every flow's loading
//! and error state. It is pure data: navigation methods are called from
//! click handlers, while the request lifecycle methods are driven
//! by `controller::AuthController` around each API call. It is never persisted;
//! a reload rebuilds it from the restored session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// The visible screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Landing,
    Login,
    Signup,
    Verify,
    Forgot,
    Reset,
    Logout,
    Dashboard,
}

impl AuthView {
    /// Screens reachable without a session.
    pub fn is_public(self) -> bool {
        !matches!(self, Self::Logout | Self::Dashboard)
    }
}

/// A screen-level operation with its own loading/error state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Login,
    Signup,
    Verify,
    Forgot,
    Reset,
}

impl Flow {
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Verify => "verify",
            Self::Forgot => "forgot",
            Self::Reset => "reset",
        }
    }

    fn for_view(view: AuthView) -> Option<Self> {
        match view {
            AuthView::Login => Some(Self::Login),
            AuthView::Signup => Some(Self::Signup),
            AuthView::Verify => Some(Self::Verify),
            AuthView::Forgot => Some(Self::Forgot),
            AuthView::Reset => Some(Self::Reset),
            AuthView::Landing | AuthView::Logout | AuthView::Dashboard => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowState {
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub view: AuthView,
    pub user: Option<AuthUser>,
    /// Email awaiting verification after sign-up.
    pub pending_email: Option<String>,
    /// Last informational message from the server.
    pub status_message: Option<String>,
    pub login: FlowState,
    pub signup: FlowState,
    pub verify: FlowState,
    pub forgot: FlowState,
    pub reset: FlowState,
    pub logout_pending: bool,
}

impl AuthState {
    /// Initial state for a page load: dashboard when a session was restored.
    pub fn restored(user: Option<AuthUser>) -> Self {
        let view = if user.is_some() { AuthView::Dashboard } else { AuthView::Landing };
        Self { view, user, ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn flow(&self, flow: Flow) -> &FlowState {
        match flow {
            Flow::Login => &self.login,
            Flow::Signup => &self.signup,
            Flow::Verify => &self.verify,
            Flow::Forgot => &self.forgot,
            Flow::Reset => &self.reset,
        }
    }

    pub fn flow_mut(&mut self, flow: Flow) -> &mut FlowState {
        match flow {
            Flow::Login => &mut self.login,
            Flow::Signup => &mut self.signup,
            Flow::Verify => &mut self.verify,
            Flow::Forgot => &mut self.forgot,
            Flow::Reset => &mut self.reset,
        }
    }

    /// Navigate to a public screen, clearing its flow error and the status
    /// message. Ignored while signed in.
    ///
    /// Entering a screen from elsewhere also clears its `loading` flag: the
    /// page that started that request has been unmounted, so its result is
    /// dropped and would never clear the flag itself.
    pub fn open(&mut self, view: AuthView) -> bool {
        if !view.is_public() || self.is_authenticated() {
            log::debug!("ignoring navigation to {view:?}");
            return false;
        }
        if let Some(flow) = Flow::for_view(view) {
            let entering = self.view != view;
            let state = self.flow_mut(flow);
            state.error = None;
            if entering && state.loading {
                log::debug!("discarding orphaned {} request", flow.name());
                state.loading = false;
            }
        }
        self.status_message = None;
        self.view = view;
        true
    }

    /// Dashboard asks for sign-out confirmation.
    pub fn request_logout(&mut self) -> bool {
        if self.view != AuthView::Dashboard {
            return false;
        }
        self.view = AuthView::Logout;
        true
    }

    /// Back out of the sign-out prompt to wherever the session allows.
    pub fn cancel_logout(&mut self) {
        if self.view != AuthView::Logout || self.logout_pending {
            return;
        }
        self.view = if self.is_authenticated() { AuthView::Dashboard } else { AuthView::Landing };
    }

    /// Start a request for `flow`. Returns `false` when one is already in
    /// flight, in which case the caller must not send another.
    pub fn begin(&mut self, flow: Flow) -> bool {
        let state = self.flow_mut(flow);
        if state.loading {
            return false;
        }
        state.loading = true;
        state.error = None;
        true
    }

    /// End a request for `flow` with a banner error.
    pub fn fail(&mut self, flow: Flow, message: String) {
        let state = self.flow_mut(flow);
        state.loading = false;
        state.error = Some(message);
    }

    /// End a request for `flow` successfully.
    pub fn finish(&mut self, flow: Flow) {
        self.flow_mut(flow).loading = false;
    }

    /// A session is active: show the dashboard.
    pub fn signed_in(&mut self, user: AuthUser) {
        self.user = Some(user);
        self.pending_email = None;
        self.status_message = None;
        self.view = AuthView::Dashboard;
    }

    /// Sign-up accepted; the account awaits email verification.
    pub fn awaiting_verification(&mut self, email: String, message: String) {
        self.pending_email = Some(email);
        self.status_message = Some(message);
        self.verify = FlowState::default();
        self.view = AuthView::Verify;
    }

    /// Password reset accepted; back to sign-in with the server's message.
    pub fn password_reset(&mut self, message: String) {
        self.status_message = Some(message);
        self.login = FlowState::default();
        self.view = AuthView::Login;
    }

    pub fn begin_logout(&mut self) -> bool {
        if self.logout_pending || self.view != AuthView::Logout {
            return false;
        }
        self.logout_pending = true;
        true
    }

    /// The local session is gone: reset to the landing screen.
    pub fn signed_out(&mut self) {
        *self = Self::default();
    }
}
