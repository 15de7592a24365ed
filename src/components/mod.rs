//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and dashboard panels. Auth-facing pieces
//! take their data as props; dashboard panels read the shared state from
//! Leptos context providers.

pub mod banner;
pub mod dashboard_panels;
pub mod form_field;
pub mod job_panel;
pub mod password_meter;
pub mod profile_panel;
pub mod resume_panel;
pub mod sidebar;
