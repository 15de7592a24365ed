//! Profile editor. Blank fields are left unchanged on the server.

#[cfg(test)]
#[path = "profile_panel_test.rs"]
mod profile_panel_test;

use leptos::prelude::*;

use crate::app::{AppDashboardController, DashboardSink};
use crate::net::jobs::parse_skills;
use crate::net::types::{AuthUser, ProfileSkill, ProfileUpdatePayload};
use crate::state::dashboard::{DashboardState, PendingAction};
use crate::util::task::spawn;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub headline: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
    pub skills: String,
}

impl ProfileDraft {
    pub fn for_user(user: &AuthUser) -> Self {
        Self { full_name: user.full_name.clone().unwrap_or_default(), ..Self::default() }
    }

    pub fn payload(&self) -> ProfileUpdatePayload {
        let text = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_owned())
        };
        ProfileUpdatePayload {
            full_name: text(&self.full_name),
            headline: text(&self.headline),
            location: text(&self.location),
            phone: text(&self.phone),
            bio: text(&self.bio),
            skills: parse_skills(&self.skills)
                .into_iter()
                .map(|skill| ProfileSkill { skill, proficiency: None })
                .collect(),
        }
    }
}

#[component]
fn DraftInput(
    draft: RwSignal<ProfileDraft>,
    label: &'static str,
    read: fn(&ProfileDraft) -> String,
    write: fn(&mut ProfileDraft, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type="text"
                prop:value=move || draft.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| write(d, value));
                }
            />
        </label>
    }
}

#[component]
pub fn ProfilePanel(user: AuthUser) -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let controller = expect_context::<AppDashboardController>();
    let sink = expect_context::<DashboardSink>();
    let draft = RwSignal::new(ProfileDraft::for_user(&user));

    let busy = move || dashboard.with(DashboardState::is_busy);
    let saving = move || dashboard.with(|state| state.pending == Some(PendingAction::SaveProfile));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = draft.with(ProfileDraft::payload);
        let controller = controller.clone();
        let sink = sink.clone();
        spawn(async move { controller.save_profile(&sink, payload).await });
    };

    view! {
        <section class="panel">
            <h2>"Profile"</h2>
            <p class="panel-hint">{user.email.clone()}</p>
            <form class="profile-form" on:submit=on_submit>
                <DraftInput draft=draft label="Full name" read=|d| d.full_name.clone() write=|d, v| d.full_name = v/>
                <DraftInput draft=draft label="Headline" read=|d| d.headline.clone() write=|d, v| d.headline = v/>
                <DraftInput draft=draft label="Location" read=|d| d.location.clone() write=|d, v| d.location = v/>
                <DraftInput draft=draft label="Phone" read=|d| d.phone.clone() write=|d, v| d.phone = v/>
                <DraftInput draft=draft label="Bio" read=|d| d.bio.clone() write=|d, v| d.bio = v/>
                <DraftInput
                    draft=draft
                    label="Skills (comma separated)"
                    read=|d| d.skills.clone()
                    write=|d, v| d.skills = v
                />
                <button class="primary-button" type="submit" disabled=busy>
                    {move || if saving() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </section>
    }
}
