//! Networking modules for the HireSight REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API base URL, `session_context` carries the shared
//! bearer token, `transport` abstracts the HTTP round trip, and `client` turns
//! typed requests into transport calls. `auth`, `jobs`, `resumes`,
//! `dashboard`, and `profile` are thin endpoint bindings over `client`;
//! `types` defines the wire schema and `error` the shared failure contract.

pub mod auth;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
#[cfg(feature = "csr")]
pub mod fetch;
pub mod jobs;
pub mod profile;
pub mod resumes;
pub mod session_context;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
