//! Account registration for job seekers and hiring companies.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::components::banner::Banner;
use crate::components::form_field::FormField;
use crate::components::password_meter::PasswordMeter;
use crate::forms::auth_forms::{SignUpField, SignUpForm};
use crate::forms::form_state::FormState;
use crate::net::types::AccountType;
use crate::state::auth::{AuthState, AuthView};
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

use super::open_view;

#[component]
fn AccountTypeToggle(form: RwSignal<FormState<SignUpForm>>) -> impl IntoView {
    let selected = move || form.with(|state| state.values().account_type);
    let option = move |account_type: AccountType, label: &'static str| {
        let class = move || {
            if selected() == account_type { "account-type-option account-type-option--active" } else { "account-type-option" }
        };
        view! {
            <button
                type="button"
                class=class
                on:click=move |_| form.update(|state| state.set_account_type(account_type))
            >
                {label}
            </button>
        }
    };
    view! {
        <div class="account-type-toggle" role="group">
            {option(AccountType::Personal, "I'm looking for a job")}
            {option(AccountType::Company, "I'm hiring")}
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();
    let form = RwSignal::new(FormState::new(SignUpForm::default()));

    let loading = move || auth.with(|state| state.signup.loading);
    let is_company = move || form.with(|state| state.values().account_type == AccountType::Company);
    let password = Signal::derive(move || form.with(|state| state.values().password.clone()));

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
        spawn(async move { controller.sign_up(&sink, payload).await });
    };

    view! {
        <div class="auth-shell">
            <div class="auth-panel signup-page">
                <h1>"Create your account"</h1>
                <p class="auth-subtitle">"Choose how you'll use HireSight."</p>
                <Banner error=Signal::derive(move || auth.with(|state| state.signup.error.clone()))/>
                <AccountTypeToggle form=form/>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <Show
                        when=is_company
                        fallback=move || {
                            view! {
                                <FormField
                                    form=form
                                    field=SignUpField::Name
                                    label="Full name"
                                    autocomplete="name"
                                    read=|f: &SignUpForm| f.name.clone()
                                    write=|f: &mut SignUpForm, v: String| f.name = v
                                />
                            }
                        }
                    >
                        <FormField
                            form=form
                            field=SignUpField::CompanyName
                            label="Company name"
                            autocomplete="organization"
                            read=|f: &SignUpForm| f.company_name.clone()
                            write=|f: &mut SignUpForm, v: String| f.company_name = v
                        />
                        <FormField
                            form=form
                            field=SignUpField::Name
                            label="Your name (optional)"
                            autocomplete="name"
                            read=|f: &SignUpForm| f.name.clone()
                            write=|f: &mut SignUpForm, v: String| f.name = v
                        />
                    </Show>
                    <FormField
                        form=form
                        field=SignUpField::Email
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        read=|f: &SignUpForm| f.email.clone()
                        write=|f: &mut SignUpForm, v: String| f.email = v
                    />
                    <FormField
                        form=form
                        field=SignUpField::Password
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        read=|f: &SignUpForm| f.password.clone()
                        write=|f: &mut SignUpForm, v: String| f.password = v
                    />
                    <PasswordMeter password=password/>
                    <button class="primary-button full-width" type="submit" disabled=loading>
                        {move || if loading() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="text-muted auth-note">
                    "Already have an account? "
                    <button class="link-text" on:click=open_view(auth, AuthView::Login)>"Sign in"</button>
                </p>
            </div>
        </div>
    }
}
