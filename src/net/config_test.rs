use super::*;

#[test]
fn default_config_targets_local_api() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "http://localhost:8000/api");
    assert_eq!(config.timeout_ms, 15_000);
    assert!(config.with_credentials);
}

#[test]
fn resolve_base_url_prefers_build_value() {
    assert_eq!(resolve_base_url(Some(" https://api.hiresight.io ")), "https://api.hiresight.io");
}

#[test]
fn resolve_base_url_ignores_blank_values() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::with_base_url("http://localhost:8000/api/");
    assert_eq!(config.url("/auth/login"), "http://localhost:8000/api/auth/login");
    assert_eq!(config.url("jobs/"), "http://localhost:8000/api/jobs/");
}

#[test]
fn url_with_empty_base_is_relative() {
    let config = ApiConfig::with_base_url("");
    assert_eq!(config.url("/resumes"), "/resumes");
}
