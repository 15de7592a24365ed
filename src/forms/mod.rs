//! Client-side form validation.
//!
//! ARCHITECTURE
//! ============
//! `rules` holds the pure field checks and their user-facing messages,
//! `form_state` the touched/error bookkeeping shared by every form, and
//! `auth_forms` and `job_form` the concrete forms that turn valid input
//! into API payloads.

pub mod auth_forms;
pub mod form_state;
pub mod job_form;
pub mod rules;
