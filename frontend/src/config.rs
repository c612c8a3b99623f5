use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://employee-leave-management-backend.vercel.app";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
    }

    // window.__ELMS_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__ELMS_CONFIG = { api_base_url: "..." }.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__ELMS_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__ELMS_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
    {
        return cache_base_url(&url);
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

/// Resolved base URL, or the default until `init` has run.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Absolute URL for a backend-relative asset such as an uploaded profile image.
pub fn asset_url(path: &str) -> String {
    const ABSOLUTE: [&str; 4] = ["http://", "https://", "blob:", "data:"];
    if ABSOLUTE.iter().any(|scheme| path.starts_with(scheme)) {
        path.to_string()
    } else {
        format!("{}/{}", api_base_url(), path.trim_start_matches('/'))
    }
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("using API base URL {}", url);
}
