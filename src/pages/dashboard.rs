//! Authenticated dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while `AuthState::view` is `Dashboard`, so a user is always
//! present. The page owns a fresh `DashboardState` per mount, provides it
//! and a scoped sink to the panels, and loads every section once on entry.
//! Leaving the page (sign-out) kills the sink so late responses are dropped.

use leptos::prelude::*;

use crate::app::{AppDashboardController, DashboardSink};
use crate::components::dashboard_panels::{ActivityFeed, ApplicationsPanel, CandidatesPanel, StatsPanel};
use crate::components::job_panel::JobPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::resume_panel::ResumePanel;
use crate::components::sidebar::{DashboardTab, Sidebar};
use crate::net::types::{AccountType, AuthUser};
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::state::sink::ScopedSink;
use crate::util::liveness::Liveness;
use crate::util::task::spawn;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    match auth.with_untracked(|state| state.user.clone()) {
        Some(user) => view! { <DashboardShell user=user/> }.into_any(),
        None => {
            log::warn!("dashboard mounted without a session");
            view! { <p class="panel-hint">"Session expired. Please sign in again."</p> }.into_any()
        }
    }
}

#[component]
fn DashboardShell(user: AuthUser) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let controller = expect_context::<AppDashboardController>();

    let dashboard = RwSignal::new(DashboardState::default());
    let sink: DashboardSink = ScopedSink::new(dashboard, Liveness::bound_to_scope());
    provide_context(dashboard);
    provide_context(sink.clone());

    let account_type = user.account_type;
    let refresh = move || {
        let controller = controller.clone();
        let sink = sink.clone();
        spawn(async move { controller.refresh(&sink, account_type).await });
    };
    refresh();

    let tab = RwSignal::new(DashboardTab::Overview);
    let on_sign_out = Callback::new(move |()| {
        auth.update(|state| {
            state.request_logout();
        });
    });

    let notice = move || dashboard.with(|state| state.notice.clone());
    let refreshing = move || dashboard.with(|state| state.stats.loading);
    let profile_user = user.clone();
    let content = move || match tab.get() {
        DashboardTab::Overview => view! {
            <StatsPanel/>
            <ActivityFeed/>
            {match account_type {
                AccountType::Personal => view! { <ApplicationsPanel/> }.into_any(),
                AccountType::Company => view! { <CandidatesPanel/> }.into_any(),
            }}
        }
        .into_any(),
        DashboardTab::Jobs => view! { <JobPanel/> }.into_any(),
        DashboardTab::Resumes => view! { <ResumePanel/> }.into_any(),
        DashboardTab::Profile => view! { <ProfilePanel user=profile_user.clone()/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            <Sidebar
                tab=tab
                account_type=account_type
                display_name=user.display_name().to_owned()
                on_sign_out=on_sign_out
            />
            <div class="dashboard-main">
                <header class="topbar">
                    <h1>{format!("Welcome, {}", user.display_name())}</h1>
                    <button class="secondary-button" disabled=refreshing on:click=move |_| refresh()>
                        {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </header>
                <Show when=move || notice().is_some()>
                    <div class="status-message" role="status">
                        <span>{notice}</span>
                        <button class="link-text" on:click=move |_| dashboard.update(DashboardState::dismiss_notice)>
                            "Dismiss"
                        </button>
                    </div>
                </Show>
                <div class="dashboard-content">{content}</div>
            </div>
        </div>
    }
}
