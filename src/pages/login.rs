//! Email and password sign-in.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::components::banner::Banner;
use crate::components::form_field::FormField;
use crate::forms::auth_forms::{LoginField, LoginForm};
use crate::forms::form_state::FormState;
use crate::state::auth::{AuthState, AuthView};
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

use super::open_view;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();
    let form = RwSignal::new(FormState::new(LoginForm::default()));

    let loading = move || auth.with(|state| state.login.loading);

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
        spawn(async move { controller.sign_in(&sink, payload).await });
    };

    view! {
        <div class="auth-shell">
            <div class="auth-panel">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to continue to HireSight."</p>
                <Banner
                    error=Signal::derive(move || auth.with(|state| state.login.error.clone()))
                    status=Signal::derive(move || auth.with(|state| state.status_message.clone()))
                />
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField
                        form=form
                        field=LoginField::Email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        read=|f: &LoginForm| f.email.clone()
                        write=|f: &mut LoginForm, v: String| f.email = v
                    />
                    <FormField
                        form=form
                        field=LoginField::Password
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        read=|f: &LoginForm| f.password.clone()
                        write=|f: &mut LoginForm, v: String| f.password = v
                    />
                    <button class="link-text" type="button" on:click=open_view(auth, AuthView::Forgot)>
                        "Forgot password?"
                    </button>
                    <button class="primary-button full-width" type="submit" disabled=loading>
                        {move || if loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-muted auth-note">
                    "New to HireSight? "
                    <button class="link-text" on:click=open_view(auth, AuthView::Signup)>"Create an account"</button>
                </p>
                <button class="link-text" on:click=open_view(auth, AuthView::Landing)>"Back to home"</button>
            </div>
        </div>
    }
}
