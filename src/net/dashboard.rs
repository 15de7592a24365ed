//! Dashboard aggregate endpoints. Pure pass-through.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::HttpTransport;
use super::types::{ApplicationListResponse, CandidateListResponse, DashboardActivityListResponse, DashboardStats};

/// `GET /dashboard/stats`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn dashboard_stats<T: HttpTransport>(client: &ApiClient<T>) -> Result<DashboardStats, ApiError> {
    client.get_json("/dashboard/stats").await
}

/// `GET /dashboard/activities`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn dashboard_activities<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<DashboardActivityListResponse, ApiError> {
    client.get_json("/dashboard/activities").await
}

/// `GET /candidates`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn list_candidates<T: HttpTransport>(client: &ApiClient<T>) -> Result<CandidateListResponse, ApiError> {
    client.get_json("/candidates").await
}

/// `GET /applications`
///
/// # Errors
///
/// Propagates any [`ApiError`] from the client.
pub async fn list_applications<T: HttpTransport>(client: &ApiClient<T>) -> Result<ApplicationListResponse, ApiError> {
    client.get_json("/applications").await
}
