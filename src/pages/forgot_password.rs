//! Request a password reset link.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::components::banner::Banner;
use crate::components::form_field::FormField;
use crate::forms::auth_forms::{ForgotPasswordField, ForgotPasswordForm};
use crate::forms::form_state::FormState;
use crate::state::auth::{AuthState, AuthView};
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

use super::open_view;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();
    let form = RwSignal::new(FormState::new(ForgotPasswordForm::default()));

    let loading = move || auth.with(|state| state.forgot.loading);

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
        spawn(async move { controller.forgot_password(&sink, payload).await });
    };

    view! {
        <div class="auth-shell">
            <div class="auth-panel">
                <h1>"Forgot your password?"</h1>
                <p class="auth-subtitle">"We'll email you a token to choose a new one."</p>
                <Banner
                    error=Signal::derive(move || auth.with(|state| state.forgot.error.clone()))
                    status=Signal::derive(move || auth.with(|state| state.status_message.clone()))
                />
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        form=form
                        field=ForgotPasswordField::Email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        read=|f: &ForgotPasswordForm| f.email.clone()
                        write=|f: &mut ForgotPasswordForm, v: String| f.email = v
                    />
                    <button class="primary-button full-width" type="submit" disabled=loading>
                        {move || if loading() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <p class="text-muted auth-note">
                    "Have a token already? "
                    <button class="link-text" on:click=open_view(auth, AuthView::Reset)>"Reset password"</button>
                </p>
                <button class="link-text" on:click=open_view(auth, AuthView::Login)>"Back to sign in"</button>
            </div>
        </div>
    }
}
