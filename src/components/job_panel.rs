//! Company job postings: list plus create form.

use leptos::prelude::*;

use crate::app::{AppDashboardController, DashboardSink};
use crate::forms::form_state::FormState;
use crate::forms::job_form::{JobField, JobForm};
use crate::state::dashboard::{DashboardState, PendingAction};
use crate::util::task::spawn;

use super::dashboard_panels::{SectionPlaceholder, section_status};
use super::form_field::FormField;

#[component]
pub fn JobPanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let controller = expect_context::<AppDashboardController>();
    let sink = expect_context::<DashboardSink>();
    let form = RwSignal::new(FormState::new(JobForm::default()));

    let creating = move || dashboard.with(|state| state.pending == Some(PendingAction::CreateJob));
    let busy = move || dashboard.with(DashboardState::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(FormState::submit).flatten() else {
            return;
        };
        let controller = controller.clone();
        let sink = sink.clone();
        spawn(async move {
            if controller.create_job(&sink, payload).await && sink.is_alive() {
                form.set(FormState::new(JobForm::default()));
            }
        });
    };

    let status = move || dashboard.with(|state| section_status(&state.jobs));
    let jobs = move || dashboard.with(|state| state.jobs.data.clone().unwrap_or_default());

    view! {
        <section class="panel">
            <h2>"Post a job"</h2>
            <form class="job-form" on:submit=on_submit>
                <FormField
                    form=form
                    field=JobField::Title
                    label="Title"
                    read=|f: &JobForm| f.title.clone()
                    write=|f: &mut JobForm, v: String| f.title = v
                />
                <FormField
                    form=form
                    field=JobField::Description
                    label="Description"
                    read=|f: &JobForm| f.description.clone()
                    write=|f: &mut JobForm, v: String| f.description = v
                />
                <label class="form-field">
                    <span class="form-label">"Required skills (comma separated)"</span>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="rust, sql"
                        prop:value=move || form.with(|state| state.values().skills.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.input(|f| f.skills = value));
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-label">"Requirements"</span>
                    <textarea
                        class="form-input"
                        prop:value=move || form.with(|state| state.values().requirements.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.input(|f| f.requirements = value));
                        }
                    ></textarea>
                </label>
                <button class="primary-button" type="submit" disabled=busy>
                    {move || if creating() { "Posting..." } else { "Post job" }}
                </button>
            </form>
        </section>
        <section class="panel">
            <h2>"Your postings"</h2>
            {move || view! { <SectionPlaceholder status=status() empty_text="No job postings yet."/> }}
            <ul class="record-list">
                <For each=jobs key=|job| job.id.clone() let:job>
                    <li class="record">
                        <strong>{job.title}</strong>
                        <span class="record-meta">{job.status.unwrap_or_else(|| "open".to_owned())}</span>
                        <span class="record-meta">
                            {format!("{} applicants", job.application_count.unwrap_or(0))}
                        </span>
                        <span class="record-tags">{job.required_skills.join(", ")}</span>
                    </li>
                </For>
            </ul>
        </section>
    }
}
