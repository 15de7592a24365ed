//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped orchestration (form signals, submit
//! handlers, a `Liveness` tied to its own lifetime) and delegates rendering
//! details to `components`. Pages never call the API directly; they hand
//! validated payloads to the controllers provided by `app`.

pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod logout;
pub mod reset_password;
pub mod signup;
pub mod verify;

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthView};

/// Click handler that opens a public screen.
pub(crate) fn open_view(auth: RwSignal<AuthState>, view: AuthView) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
    move |_| {
        auth.update(|state| {
            state.open(view);
        });
    }
}
