//! Frontend Configuration
//!
//! Read once at startup from an optional inline JSON block:
//!
//! ```html
//! <script id="app-config" type="application/json">
//!   { "api_base": "http://localhost:5000", "card_layout": "scored" }
//! </script>
//! ```

use recommend_core::CardLayout;
use serde::Deserialize;

/// Id of the `<script>` element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the API server; the page's own origin when unset
    pub api_base: Option<String>,
    pub recommend_path: String,
    pub card_layout: CardLayout,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            recommend_path: "/recommend".to_string(),
            card_layout: CardLayout::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Load from the page. A page without a config block gets the defaults.
    pub fn load() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Absolute URL of the recommend endpoint
    pub fn endpoint(&self, page_origin: &str) -> String {
        let base = self.api_base.as_deref().unwrap_or(page_origin).trim_end_matches('/');
        let path = self.recommend_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// `window.location.origin`, empty outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_json("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.recommend_path, "/recommend");
        assert_eq!(config.card_layout, CardLayout::Details);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "card_layout": "scored" }"#).unwrap();
        assert_eq!(config.card_layout, CardLayout::Scored);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn test_invalid_config() {
        assert!(AppConfig::from_json("{ card_layout: scored").is_err());
        assert!(AppConfig::from_json(r#"{ "card_layout": "grid" }"#).is_err());
    }

    #[test]
    fn test_endpoint_uses_page_origin() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("http://127.0.0.1:5000"), "http://127.0.0.1:5000/recommend");
    }

    #[test]
    fn test_endpoint_with_api_base() {
        let config = AppConfig {
            api_base: Some("https://api.example.org/".to_string()),
            recommend_path: "v1/recommend".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("http://ignored"), "https://api.example.org/v1/recommend");
    }
}
