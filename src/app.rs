//! Root application component and context wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no URL router: the visible screen is `AuthState::view`. `App`
//! restores any persisted session, provides the auth signal and both
//! controllers as context, and swaps pages whenever the view changes.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::client::ApiClient;
use crate::net::config::ApiConfig;
use crate::net::session_context::SessionContext;
use crate::net::transport::DefaultTransport;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::logout::LogoutPrompt;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::signup::SignUpPage;
use crate::pages::verify::VerifyPage;
use crate::state::auth::AuthView;
use crate::state::controller::AuthController;
use crate::state::dashboard::{DashboardController, DashboardState};
use crate::state::session::SessionStore;
use crate::state::sink::ScopedSink;
use crate::state::storage::DefaultStorage;

pub type AppAuthController = AuthController<DefaultTransport, DefaultStorage>;
pub type AppDashboardController = DashboardController<DefaultTransport>;
/// Dashboard state as seen by async work started from the dashboard page.
pub type DashboardSink = ScopedSink<RwSignal<DashboardState>>;

fn page_title(view: AuthView) -> &'static str {
    match view {
        AuthView::Landing => "HireSight",
        AuthView::Login => "Sign in | HireSight",
        AuthView::Signup => "Create account | HireSight",
        AuthView::Verify => "Verify email | HireSight",
        AuthView::Forgot => "Forgot password | HireSight",
        AuthView::Reset => "Reset password | HireSight",
        AuthView::Logout => "Sign out | HireSight",
        AuthView::Dashboard => "Dashboard | HireSight",
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::load();
    log::info!("api base url: {}", config.base_url);
    let session = SessionContext::new();
    let client = ApiClient::new(config, session.clone(), DefaultTransport::default());
    let controller: AppAuthController =
        AuthController::new(client.clone(), SessionStore::new(DefaultStorage::default(), session));

    let auth = RwSignal::new(controller.restore());
    provide_context(auth);
    provide_context(controller);
    provide_context::<AppDashboardController>(DashboardController::new(client));

    // Pages re-mount only when the screen changes, not on every flow update.
    let screen = Memo::new(move |_| auth.with(|state| state.view));

    view! {
        <Title text=move || page_title(screen.get())/>
        <main class="app-shell">
            {move || match screen.get() {
                AuthView::Landing => view! { <LandingPage/> }.into_any(),
                AuthView::Login => view! { <LoginPage/> }.into_any(),
                AuthView::Signup => view! { <SignUpPage/> }.into_any(),
                AuthView::Verify => view! { <VerifyPage/> }.into_any(),
                AuthView::Forgot => view! { <ForgotPasswordPage/> }.into_any(),
                AuthView::Reset => view! { <ResetPasswordPage/> }.into_any(),
                AuthView::Logout => view! { <LogoutPrompt/> }.into_any(),
                AuthView::Dashboard => view! { <DashboardPage/> }.into_any(),
            }}
        </main>
    }
}
