//! Flow-level error and status banners.

use leptos::prelude::*;

/// Shows the flow's banner error and the last server status message.
#[component]
pub fn Banner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, optional)] status: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let status = move || status.and_then(|status| status.get());
    view! {
        <Show when=move || status().is_some()>
            <div class="status-message" role="status">{status}</div>
        </Show>
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">{move || error.get()}</div>
        </Show>
    }
}
