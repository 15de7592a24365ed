//! Email verification after sign-up.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::components::banner::Banner;
use crate::components::form_field::FormField;
use crate::forms::auth_forms::{VerifyField, VerifyForm};
use crate::forms::form_state::FormState;
use crate::state::auth::{AuthState, AuthView};
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

use super::open_view;

#[component]
pub fn VerifyPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();
    let form = RwSignal::new(FormState::new(VerifyForm::default()));

    let loading = move || auth.with(|state| state.verify.loading);
    let recipient = move || {
        auth.with(|state| state.pending_email.clone()).unwrap_or_else(|| "your inbox".to_owned())
    };

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
        spawn(async move { controller.verify_email(&sink, payload).await });
    };

    view! {
        <div class="auth-shell">
            <div class="auth-panel">
                <h1>"Verify your email"</h1>
                <p class="auth-subtitle">
                    "Enter the verification token sent to " <strong>{recipient}</strong>
                    " to activate your account."
                </p>
                <Banner
                    error=Signal::derive(move || auth.with(|state| state.verify.error.clone()))
                    status=Signal::derive(move || auth.with(|state| state.status_message.clone()))
                />
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        form=form
                        field=VerifyField::Token
                        label="Verification token"
                        placeholder="Paste your token"
                        autocomplete="one-time-code"
                        read=|f: &VerifyForm| f.token.clone()
                        write=|f: &mut VerifyForm, v: String| f.token = v
                    />
                    <button class="primary-button full-width" type="submit" disabled=loading>
                        {move || if loading() { "Verifying..." } else { "Verify & sign in" }}
                    </button>
                </form>
                <p class="text-muted auth-note">
                    "Already verified? "
                    <button class="link-text" on:click=open_view(auth, AuthView::Login)>"Sign in"</button>
                </p>
            </div>
        </div>
    }
}
