//! Dashboard navigation rail.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::net::types::AccountType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Jobs,
    Resumes,
    Profile,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Jobs => "Job postings",
            Self::Resumes => "My resumes",
            Self::Profile => "Profile",
        }
    }

    /// Tabs shown for an account, in order.
    pub fn for_account(account_type: AccountType) -> &'static [DashboardTab] {
        match account_type {
            AccountType::Personal => &[Self::Overview, Self::Resumes, Self::Profile],
            AccountType::Company => &[Self::Overview, Self::Jobs, Self::Profile],
        }
    }
}

#[component]
pub fn Sidebar(
    tab: RwSignal<DashboardTab>,
    account_type: AccountType,
    display_name: String,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let items = DashboardTab::for_account(account_type)
        .iter()
        .map(|&item| {
            let class = move || if tab.get() == item { "sidebar-item sidebar-item--active" } else { "sidebar-item" };
            view! {
                <li>
                    <button class=class on:click=move |_| tab.set(item)>
                        {item.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"HireSight"</div>
            <ul class="sidebar-nav">{items}</ul>
            <div class="sidebar-footer">
                <span class="sidebar-user">{display_name}</span>
                <button class="link-text" on:click=move |_| on_sign_out.run(())>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
