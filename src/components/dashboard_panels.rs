//! Read-only dashboard panels: stats, activity, candidates, applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel reads its own `Loadable` section of the shared
//! `DashboardState` and renders one of loading, error, empty or data.

#[cfg(test)]
#[path = "dashboard_panels_test.rs"]
mod dashboard_panels_test;

use leptos::prelude::*;

use crate::net::types::DashboardStats;
use crate::state::dashboard::{DashboardState, Loadable};

/// What a section should render right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionStatus {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

/// Loaded data wins over a later refresh error; the error still shows
/// when nothing was ever loaded.
pub fn section_status<T>(section: &Loadable<Vec<T>>) -> SectionStatus {
    match (&section.data, &section.error) {
        (None, _) if section.loading => SectionStatus::Loading,
        (None, Some(error)) => SectionStatus::Failed(error.clone()),
        (Some(items), _) if !items.is_empty() => SectionStatus::Ready,
        _ => SectionStatus::Empty,
    }
}

/// Percentage with one decimal, or `n/a` before any match exists.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "n/a".to_owned(), |score| format!("{score:.1}%"))
}

fn stat_tiles(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    vec![
        ("Resumes", stats.total_resumes.to_string()),
        ("Jobs", stats.total_jobs.to_string()),
        ("Applications", stats.total_applications.to_string()),
        ("Matches", stats.total_matches.to_string()),
        ("Avg. match", format_score(stats.average_match_score)),
    ]
}

/// Placeholder for a section that has nothing to show yet.
#[component]
pub fn SectionPlaceholder(status: SectionStatus, empty_text: &'static str) -> impl IntoView {
    match status {
        SectionStatus::Loading => view! { <p class="panel-hint">"Loading..."</p> }.into_any(),
        SectionStatus::Failed(error) => view! { <p class="panel-error">{error}</p> }.into_any(),
        SectionStatus::Empty => view! { <p class="panel-hint">{empty_text}</p> }.into_any(),
        SectionStatus::Ready => ().into_any(),
    }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let body = move || {
        dashboard.with(|state| match (&state.stats.data, &state.stats.error) {
            (Some(stats), _) => stat_tiles(stats)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat-tile">
                            <span class="stat-value">{value}</span>
                            <span class="stat-label">{label}</span>
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
            (None, Some(error)) => view! { <p class="panel-error">{error.clone()}</p> }.into_any(),
            (None, None) => view! { <p class="panel-hint">"Loading..."</p> }.into_any(),
        })
    };
    view! { <section class="panel stats-panel">{body}</section> }
}

#[component]
pub fn ActivityFeed() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let status = move || dashboard.with(|state| section_status(&state.activities));
    let items = move || dashboard.with(|state| state.activities.data.clone().unwrap_or_default());

    view! {
        <section class="panel">
            <h2>"Recent activity"</h2>
            {move || view! { <SectionPlaceholder status=status() empty_text="No activity yet."/> }}
            <ul class="activity-list">
                <For each=items key=|item| item.id.clone() let:item>
                    <li class="activity-item">
                        <span class="activity-message">{item.message}</span>
                        <time class="activity-time">{item.created_at}</time>
                    </li>
                </For>
            </ul>
        </section>
    }
}

#[component]
pub fn CandidatesPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let status = move || dashboard.with(|state| section_status(&state.candidates));
    let items = move || dashboard.with(|state| state.candidates.data.clone().unwrap_or_default());

    view! {
        <section class="panel">
            <h2>"Top candidates"</h2>
            {move || view! { <SectionPlaceholder status=status() empty_text="No candidates matched yet."/> }}
            <ul class="record-list">
                <For each=items key=|candidate| candidate.id.clone() let:candidate>
                    <li class="record">
                        <strong>{candidate.name}</strong>
                        <span class="record-meta">{candidate.role.unwrap_or_default()}</span>
                        <span class="record-score">{format_score(Some(candidate.score))}</span>
                        <span class="record-tags">{candidate.skills.join(", ")}</span>
                    </li>
                </For>
            </ul>
        </section>
    }
}

#[component]
pub fn ApplicationsPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let status = move || dashboard.with(|state| section_status(&state.applications));
    let items = move || dashboard.with(|state| state.applications.data.clone().unwrap_or_default());

    view! {
        <section class="panel">
            <h2>"My applications"</h2>
            {move || view! { <SectionPlaceholder status=status() empty_text="You have not applied to any jobs yet."/> }}
            <ul class="record-list">
                <For each=items key=|application| application.id.clone() let:application>
                    <li class="record">
                        <strong>{application.job_title.unwrap_or(application.job_id)}</strong>
                        <span class="record-meta">{application.status}</span>
                        <span class="record-score">{format_score(application.match_score)}</span>
                    </li>
                </For>
            </ul>
        </section>
    }
}
