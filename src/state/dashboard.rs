//! Post-login dashboard data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard is a read-mostly view over the domain endpoints. Each panel
//! is a `Loadable` section that fails on its own: a broken stats call shows
//! an error in the stats panel and leaves the rest of the dashboard usable.
//! Personal accounts see their resumes and applications; company accounts
//! see their job postings and candidates. Both see stats and activity.
//!
//! INVARIANTS
//! ==========
//! - At most one mutating action (create, upload, parse, profile save) runs
//!   at a time; `pending` names it.
//! - Results arriving after the dashboard was torn down are dropped by the
//!   sink, the same way auth flows are.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::client::ApiClient;
use crate::net::dashboard::{dashboard_activities, dashboard_stats, list_applications, list_candidates};
use crate::net::error::{ApiError, describe_error};
use crate::net::jobs::{create_job, list_jobs};
use crate::net::profile::update_profile;
use crate::net::resumes::{list_resumes, parse_resume, upload_resume};
use crate::net::transport::HttpTransport;
use crate::net::types::{
    AccountType, ApplicationSummary, CandidateSummary, DashboardActivity, DashboardStats, JobCreatePayload, JobOut,
    ProfileUpdatePayload, ResumeOut,
};

use super::sink::StateSink;

/// One independently loaded panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> Loadable<T> {
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a load result. A failure keeps previously loaded data.
    fn settle(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                log::warn!("dashboard section failed to load: {err}");
                self.error = Some(describe_error(&err));
            }
        }
    }
}

/// The mutating action currently in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    CreateJob,
    UploadResume,
    ParseResume(String),
    SaveProfile,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub stats: Loadable<DashboardStats>,
    pub activities: Loadable<Vec<DashboardActivity>>,
    pub jobs: Loadable<Vec<JobOut>>,
    pub resumes: Loadable<Vec<ResumeOut>>,
    pub candidates: Loadable<Vec<CandidateSummary>>,
    pub applications: Loadable<Vec<ApplicationSummary>>,
    /// Transient outcome of the last action, success or failure.
    pub notice: Option<String>,
    pub pending: Option<PendingAction>,
}

impl DashboardState {
    fn begin_refresh(&mut self, account_type: AccountType) {
        self.stats.start();
        self.activities.start();
        match account_type {
            AccountType::Personal => {
                self.resumes.start();
                self.applications.start();
            }
            AccountType::Company => {
                self.jobs.start();
                self.candidates.start();
            }
        }
    }

    fn begin_action(&mut self, action: PendingAction) -> bool {
        if let Some(current) = &self.pending {
            log::debug!("dashboard action {action:?} ignored while {current:?} runs");
            return false;
        }
        self.pending = Some(action);
        self.notice = None;
        true
    }

    fn end_action(&mut self, notice: String) {
        self.pending = None;
        self.notice = Some(notice);
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn upsert_resume(&mut self, resume: ResumeOut) {
        let resumes = self.resumes.data.get_or_insert_with(Vec::new);
        match resumes.iter_mut().find(|existing| existing.id == resume.id) {
            Some(existing) => *existing = resume,
            None => resumes.insert(0, resume),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DashboardController<T> {
    client: ApiClient<T>,
}

impl<T: HttpTransport> DashboardController<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Load every panel for `account_type` concurrently.
    pub async fn refresh(&self, sink: &impl StateSink<DashboardState>, account_type: AccountType) {
        if sink.apply(|state| state.begin_refresh(account_type)).is_none() {
            return;
        }
        let client = &self.client;
        let applied = match account_type {
            AccountType::Personal => {
                let (stats, activities, resumes, applications) = futures::join!(
                    dashboard_stats(client),
                    dashboard_activities(client),
                    list_resumes(client),
                    list_applications(client),
                );
                sink.apply(|state| {
                    state.stats.settle(stats);
                    state.activities.settle(activities.map(|list| list.activities));
                    state.resumes.settle(resumes.map(|list| list.resumes));
                    state.applications.settle(applications.map(|list| list.applications));
                })
            }
            AccountType::Company => {
                let (stats, activities, jobs, candidates) = futures::join!(
                    dashboard_stats(client),
                    dashboard_activities(client),
                    list_jobs(client),
                    list_candidates(client),
                );
                sink.apply(|state| {
                    state.stats.settle(stats);
                    state.activities.settle(activities.map(|list| list.activities));
                    state.jobs.settle(jobs);
                    state.candidates.settle(candidates.map(|list| list.candidates));
                })
            }
        };
        if applied.is_none() {
            log::debug!("dashboard refresh resolved after teardown");
        }
    }

    /// Returns `true` when the job was created and shown.
    pub async fn create_job(&self, sink: &impl StateSink<DashboardState>, payload: JobCreatePayload) -> bool {
        if sink.apply(|state| state.begin_action(PendingAction::CreateJob)) != Some(true) {
            return false;
        }
        let result = create_job(&self.client, &payload).await;
        let created = sink.apply(|state| match result {
            Ok(job) => {
                let notice = format!("Created {}", job.title);
                state.jobs.data.get_or_insert_with(Vec::new).insert(0, job);
                state.end_action(notice);
                true
            }
            Err(err) => {
                state.end_action(describe_error(&err));
                false
            }
        });
        created == Some(true)
    }

    pub async fn upload_resume(
        &self,
        sink: &impl StateSink<DashboardState>,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) {
        if sink.apply(|state| state.begin_action(PendingAction::UploadResume)) != Some(true) {
            return;
        }
        let result = upload_resume(&self.client, &file_name, content_type.as_deref(), bytes).await;
        sink.apply(|state| match result {
            Ok(resume) => {
                let notice = format!("Uploaded {}", resume.filename);
                state.upsert_resume(resume);
                state.end_action(notice);
            }
            Err(err) => state.end_action(describe_error(&err)),
        });
    }

    /// Ask the server to parse a stored resume and show the parsed record.
    pub async fn parse_resume(&self, sink: &impl StateSink<DashboardState>, resume_id: String) {
        if sink.apply(|state| state.begin_action(PendingAction::ParseResume(resume_id.clone()))) != Some(true) {
            return;
        }
        let result = parse_resume(&self.client, &resume_id).await;
        sink.apply(|state| match result {
            Ok(resume) => {
                let notice = format!("Parsed {}", resume.filename);
                state.upsert_resume(resume);
                state.end_action(notice);
            }
            Err(err) => state.end_action(describe_error(&err)),
        });
    }

    pub async fn save_profile(&self, sink: &impl StateSink<DashboardState>, payload: ProfileUpdatePayload) {
        if sink.apply(|state| state.begin_action(PendingAction::SaveProfile)) != Some(true) {
            return;
        }
        let result = update_profile(&self.client, &payload).await;
        sink.apply(|state| match result {
            Ok(_) => state.end_action("Profile updated".to_owned()),
            Err(err) => state.end_action(describe_error(&err)),
        });
    }
}
