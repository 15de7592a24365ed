//! Personal resumes: list, upload and server-side parse.

#[cfg(test)]
#[path = "resume_panel_test.rs"]
mod resume_panel_test;

use leptos::prelude::*;

use crate::app::{AppDashboardController, DashboardSink};
use crate::net::types::ResumeOut;
use crate::state::dashboard::{DashboardState, PendingAction};
use crate::util::task::spawn;

use super::dashboard_panels::{SectionPlaceholder, section_status};

/// Human-readable file size, e.g. `"240 KB"`.
#[allow(clippy::cast_precision_loss)]
fn size_label(bytes: Option<u64>) -> Option<String> {
    let bytes = bytes?;
    Some(match bytes {
        0..1_024 => format!("{bytes} B"),
        1_024..1_048_576 => format!("{} KB", bytes / 1_024),
        _ => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
    })
}

fn is_parsed(resume: &ResumeOut) -> bool {
    resume.parsed_data.as_object().is_some_and(|data| !data.is_empty())
}

#[cfg(feature = "csr")]
fn handle_file_selected(ev: leptos::ev::Event, controller: AppDashboardController, sink: DashboardSink) {
    use crate::state::sink::StateSink;

    let input = event_target::<web_sys::HtmlInputElement>(&ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    input.set_value("");
    spawn(async move {
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await;
        match buffer {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                let content_type = Some(file.type_()).filter(|kind| !kind.is_empty());
                controller.upload_resume(&sink, file.name(), content_type, bytes).await;
            }
            Err(err) => {
                log::warn!("failed to read {}: {err:?}", file.name());
                sink.apply(|state| state.notice = Some(format!("Could not read {}", file.name())));
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn handle_file_selected(_ev: leptos::ev::Event, _controller: AppDashboardController, _sink: DashboardSink) {
    log::debug!("resume upload needs the browser build");
}

#[component]
pub fn ResumePanel() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let controller = expect_context::<AppDashboardController>();
    let sink = expect_context::<DashboardSink>();

    let busy = move || dashboard.with(DashboardState::is_busy);
    let uploading = move || dashboard.with(|state| state.pending == Some(PendingAction::UploadResume));
    let status = move || dashboard.with(|state| section_status(&state.resumes));
    let resumes = move || dashboard.with(|state| state.resumes.data.clone().unwrap_or_default());

    let upload_controller = controller.clone();
    let upload_sink = sink.clone();
    let on_file = move |ev: leptos::ev::Event| handle_file_selected(ev, upload_controller.clone(), upload_sink.clone());

    let parse = move |resume_id: String| {
        let controller = controller.clone();
        let sink = sink.clone();
        spawn(async move { controller.parse_resume(&sink, resume_id).await });
    };

    view! {
        <section class="panel">
            <h2>"Upload a resume"</h2>
            <label class="upload-drop">
                <span>{move || if uploading() { "Uploading..." } else { "Choose a PDF or DOCX file" }}</span>
                <input type="file" accept=".pdf,.doc,.docx" disabled=busy on:change=on_file/>
            </label>
        </section>
        <section class="panel">
            <h2>"My resumes"</h2>
            {move || view! { <SectionPlaceholder status=status() empty_text="No resumes uploaded yet."/> }}
            <ul class="record-list">
                <For each=resumes key=|resume| (resume.id.clone(), is_parsed(resume)) let:resume>
                    {
                        let parse = parse.clone();
                        let resume_id = resume.id.clone();
                        let parsing_id = resume.id.clone();
                        let parsing = move || {
                            dashboard.with(|state| state.pending == Some(PendingAction::ParseResume(parsing_id.clone())))
                        };
                        let parsed = is_parsed(&resume);
                        view! {
                            <li class="record">
                                <strong>{resume.version_name.clone().unwrap_or_else(|| resume.filename.clone())}</strong>
                                <span class="record-meta">{size_label(resume.file_size)}</span>
                                <span class="record-meta">{if parsed { "Parsed" } else { "Not parsed" }}</span>
                                <button
                                    class="secondary-button"
                                    disabled=busy
                                    on:click=move |_| parse(resume_id.clone())
                                >
                                    {move || if parsing() { "Parsing..." } else if parsed { "Re-parse" } else { "Parse" }}
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </section>
    }
}
