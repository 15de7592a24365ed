//! API client configuration.
//!
//! The base URL comes from the build-time `HIRESIGHT_API_BASE_URL` variable
//! and may be overridden at runtime through `window.HIRESIGHT_CONFIG` so a
//! static deployment can point at another API without rebuilding. Values here
//! are public; never place secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Local development endpoint used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
/// Per-request timeout applied by every transport.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Resolved settings shared by every API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    /// Send cookies on cross-origin requests.
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the standard timeout and credential policy.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            with_credentials: true,
        }
    }

    /// Load config from the build environment, then apply any runtime override.
    pub fn load() -> Self {
        let mut config = Self::with_base_url(&resolve_base_url(option_env!("HIRESIGHT_API_BASE_URL")));
        if let Some(base_url) = runtime_base_url() {
            config.base_url = base_url;
        }
        config
    }

    /// Join the configured base URL and an endpoint path with exactly one `/`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn resolve_base_url(build_value: Option<&str>) -> String {
    build_value
        .and_then(normalize_value)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "csr")]
fn runtime_base_url() -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("HIRESIGHT_CONFIG")).unwrap_or(JsValue::UNDEFINED);
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_base_url")).unwrap_or(JsValue::UNDEFINED);
    value.as_string().as_deref().and_then(normalize_value)
}

#[cfg(not(feature = "csr"))]
fn runtime_base_url() -> Option<String> {
    None
}
