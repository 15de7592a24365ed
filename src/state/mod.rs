//! Client-side application state.
//!
//! ARCHITECTURE
//! ============
//! `storage` abstracts durable key/value persistence, `session` keeps the
//! persisted token and user in step with the shared auth header, `auth`
//! holds the view-state machine, `controller` drives the async auth flows
//! against it, and `dashboard` owns the post-login data panels. Async results
//! reach either state through a `sink`.

pub mod auth;
pub mod controller;
pub mod dashboard;
pub mod session;
pub mod sink;
pub mod storage;
