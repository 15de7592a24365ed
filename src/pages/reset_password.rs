//! Choose a new password with a reset token.
//!
//! A mismatched confirmation is caught by the form and never reaches the
//! server.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::components::banner::Banner;
use crate::components::form_field::FormField;
use crate::forms::auth_forms::{ResetPasswordField, ResetPasswordForm};
use crate::forms::form_state::FormState;
use crate::state::auth::{AuthState, AuthView};
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

use super::open_view;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();
    let form = RwSignal::new(FormState::new(ResetPasswordForm::default()));

    let loading = move || auth.with(|state| state.reset.loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let Some(payload) = form.try_update(FormState::submit).flatten() else {
            return;
        };
        let controller = controller.clone();
        let sink = ScopedSink::new(auth, alive.clone());
        spawn(async move { controller.reset_password(&sink, payload).await });
    };

    view! {
        <div class="auth-shell">
            <div class="auth-panel">
                <h1>"Enter your reset token"</h1>
                <p class="auth-subtitle">"Paste the token you received and choose a new strong password."</p>
                <Banner
                    error=Signal::derive(move || auth.with(|state| state.reset.error.clone()))
                    status=Signal::derive(move || auth.with(|state| state.status_message.clone()))
                />
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        form=form
                        field=ResetPasswordField::Token
                        label="Reset token"
                        read=|f: &ResetPasswordForm| f.token.clone()
                        write=|f: &mut ResetPasswordForm, v: String| f.token = v
                    />
                    <FormField
                        form=form
                        field=ResetPasswordField::Password
                        label="New password"
                        input_type="password"
                        autocomplete="new-password"
                        read=|f: &ResetPasswordForm| f.password.clone()
                        write=|f: &mut ResetPasswordForm, v: String| f.password = v
                    />
                    <FormField
                        form=form
                        field=ResetPasswordField::Confirmation
                        label="Confirm new password"
                        input_type="password"
                        autocomplete="new-password"
                        read=|f: &ResetPasswordForm| f.confirmation.clone()
                        write=|f: &mut ResetPasswordForm, v: String| f.confirmation = v
                    />
                    <button class="primary-button full-width" type="submit" disabled=loading>
                        {move || if loading() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                <button class="link-text" on:click=open_view(auth, AuthView::Login)>"Back to sign in"</button>
            </div>
        </div>
    }
}
