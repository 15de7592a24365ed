use super::*;
use crate::net::types::AccountType;

fn user() -> AuthUser {
    AuthUser {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        account_type: AccountType::Personal,
        is_verified: true,
        is_active: true,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
        full_name: Some("Ada".to_owned()),
        company_name: None,
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn restored_without_user_starts_on_landing() {
    let state = AuthState::restored(None);
    assert_eq!(state.view, AuthView::Landing);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_with_user_starts_on_dashboard() {
    let state = AuthState::restored(Some(user()));
    assert_eq!(state.view, AuthView::Dashboard);
    assert!(state.is_authenticated());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn open_login_clears_login_error_and_status() {
    let mut state = AuthState::default();
    state.login.error = Some("old".to_owned());
    state.signup.error = Some("keep".to_owned());
    state.status_message = Some("info".to_owned());

    assert!(state.open(AuthView::Login));

    assert_eq!(state.view, AuthView::Login);
    assert_eq!(state.login.error, None);
    assert_eq!(state.signup.error.as_deref(), Some("keep"));
    assert_eq!(state.status_message, None);
}

#[test]
fn open_signup_clears_signup_error() {
    let mut state = AuthState::default();
    state.signup.error = Some("old".to_owned());
    assert!(state.open(AuthView::Signup));
    assert_eq!(state.view, AuthView::Signup);
    assert_eq!(state.signup.error, None);
}

#[test]
fn reopening_a_screen_clears_a_stranded_loading_flag() {
    let mut state = AuthState { view: AuthView::Login, ..AuthState::default() };
    assert!(state.begin(Flow::Login));

    state.open(AuthView::Forgot);
    assert!(state.login.loading);
    state.open(AuthView::Login);

    assert!(!state.login.loading);
    assert!(state.begin(Flow::Login));
}

#[test]
fn open_current_screen_keeps_request_in_flight() {
    let mut state = AuthState { view: AuthView::Login, ..AuthState::default() };
    assert!(state.begin(Flow::Login));

    assert!(state.open(AuthView::Login));

    assert!(state.login.loading);
    assert!(!state.begin(Flow::Login));
}

#[test]
fn open_is_ignored_while_signed_in() {
    let mut state = AuthState::restored(Some(user()));
    assert!(!state.open(AuthView::Login));
    assert_eq!(state.view, AuthView::Dashboard);
}

#[test]
fn open_rejects_private_views() {
    let mut state = AuthState::default();
    assert!(!state.open(AuthView::Dashboard));
    assert!(!state.open(AuthView::Logout));
    assert_eq!(state.view, AuthView::Landing);
}

// =============================================================
// Flow lifecycle
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = AuthState::default();
    state.login.error = Some("previous".to_owned());
    assert!(state.begin(Flow::Login));
    assert!(state.login.loading);
    assert_eq!(state.login.error, None);
    assert_eq!(state.flow(Flow::Login), &state.login);
    assert_eq!(Flow::Login.name(), "login");
}

#[test]
fn begin_rejects_duplicate_submission() {
    let mut state = AuthState::default();
    assert!(state.begin(Flow::Verify));
    assert!(!state.begin(Flow::Verify));
    assert!(state.begin(Flow::Forgot));
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut state = AuthState::default();
    state.begin(Flow::Signup);
    state.fail(Flow::Signup, "Email already registered".to_owned());
    assert_eq!(state.signup, FlowState { loading: false, error: Some("Email already registered".to_owned()) });
}

#[test]
fn awaiting_verification_moves_to_verify() {
    let mut state = AuthState::default();
    state.open(AuthView::Signup);
    state.awaiting_verification("a@b.com".to_owned(), "Check your email".to_owned());
    assert_eq!(state.view, AuthView::Verify);
    assert_eq!(state.pending_email.as_deref(), Some("a@b.com"));
    assert_eq!(state.status_message.as_deref(), Some("Check your email"));
}

#[test]
fn signed_in_shows_dashboard_and_clears_pending_email() {
    let mut state = AuthState::default();
    state.awaiting_verification("a@b.com".to_owned(), "Check your email".to_owned());
    state.signed_in(user());
    assert_eq!(state.view, AuthView::Dashboard);
    assert_eq!(state.pending_email, None);
    assert_eq!(state.status_message, None);
    assert_eq!(state.user, Some(user()));
}

#[test]
fn password_reset_returns_to_login_with_message() {
    let mut state = AuthState::default();
    state.open(AuthView::Reset);
    state.login.loading = true;
    state.password_reset("Password updated".to_owned());
    assert_eq!(state.view, AuthView::Login);
    assert_eq!(state.status_message.as_deref(), Some("Password updated"));
    assert!(!state.login.loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn request_logout_only_from_dashboard() {
    let mut state = AuthState::default();
    assert!(!state.request_logout());

    let mut state = AuthState::restored(Some(user()));
    assert!(state.request_logout());
    assert_eq!(state.view, AuthView::Logout);
}

#[test]
fn cancel_logout_returns_to_dashboard_with_session() {
    let mut state = AuthState::restored(Some(user()));
    state.request_logout();
    state.cancel_logout();
    assert_eq!(state.view, AuthView::Dashboard);
}

#[test]
fn cancel_logout_without_session_returns_to_landing() {
    let mut state = AuthState { view: AuthView::Logout, ..AuthState::default() };
    state.cancel_logout();
    assert_eq!(state.view, AuthView::Landing);
}

#[test]
fn cancel_logout_ignored_while_logout_in_flight() {
    let mut state = AuthState::restored(Some(user()));
    state.request_logout();
    assert!(state.begin_logout());
    assert!(!state.begin_logout());
    state.cancel_logout();
    assert_eq!(state.view, AuthView::Logout);
}

#[test]
fn signed_out_resets_to_landing() {
    let mut state = AuthState::restored(Some(user()));
    state.request_logout();
    state.begin_logout();
    state.signed_out();
    assert_eq!(state, AuthState::default());
    assert_eq!(state.view, AuthView::Landing);
}
