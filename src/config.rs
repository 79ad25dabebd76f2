//! UI Configuration
//!
//! Tunables for the vault frontend. The API base URL can be overridden by
//! the hosting page with `<meta name="vault-api-base" content="...">`.

use crate::models::GeneratorOptions;

const API_BASE_META: &str = "meta[name=\"vault-api-base\"]";

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Prefix for every `/api/...` path; empty means same origin
    pub api_base: String,
    /// Where to go after locking the vault
    pub landing_route: String,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    pub search_min_chars: usize,
    pub theme_storage_key: String,
    pub generator_defaults: GeneratorOptions,
    /// Viewport width at or below which the sidebar is a drawer
    pub mobile_breakpoint_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            landing_route: "/".to_string(),
            toast_visible_ms: 3000,
            toast_fade_ms: 300,
            search_min_chars: 2,
            theme_storage_key: "theme".to_string(),
            generator_defaults: GeneratorOptions::default(),
            mobile_breakpoint_px: 768.0,
        }
    }
}

impl UiConfig {
    /// Defaults, with the API base taken from the page when present
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let meta = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(API_BASE_META).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        if let Some(base) = meta {
            config.api_base = normalize_base(&base);
        }
        config
    }
}

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://vault.local/"), "https://vault.local");
        assert_eq!(normalize_base(" /prefix// "), "/prefix");
        assert_eq!(normalize_base(""), "");
    }

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.search_min_chars, 2);
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.generator_defaults.length, 16);
    }
}
