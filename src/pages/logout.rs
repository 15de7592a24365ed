//! Sign-out confirmation.

use leptos::prelude::*;

use crate::app::AppAuthController;
use crate::state::auth::AuthState;
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

#[component]
pub fn LogoutPrompt() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppAuthController>();
    let alive = Liveness::bound_to_scope();

    let pending = move || auth.with(|state| state.logout_pending);

    let on_confirm = move |_| {
        let controller = controller.clone();
        let sink = ScopedSink::new(auth, alive.clone());
        spawn(async move { controller.confirm_logout(&sink).await });
    };
    let on_cancel = move |_| auth.update(AuthState::cancel_logout);

    view! {
        <div class="auth-shell">
            <div class="auth-panel logout-prompt">
                <h1>"Sign out?"</h1>
                <p class="auth-subtitle">"You'll need to sign in again to see your dashboard."</p>
                <div class="prompt-actions">
                    <button class="primary-button" disabled=pending on:click=on_confirm>
                        {move || if pending() { "Signing out..." } else { "Sign out" }}
                    </button>
                    <button class="secondary-button" disabled=pending on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
