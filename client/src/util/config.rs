//! Runtime client configuration.
//!
//! The host renders `<meta name="api-base" content="...">` into the shell so
//! one wasm bundle can target any deployment of the risk API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use assessments::api::DEFAULT_API_BASE;

pub const API_BASE_META: &str = "api-base";

/// Pick the configured base, falling back to the default for blank values.
#[must_use]
pub fn normalize_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

/// Base URL of the risk API for this page.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());
        normalize_api_base(content.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        normalize_api_base(None)
    }
}
