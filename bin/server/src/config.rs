//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.
//!
//! See [`ContentConfig`] for the upstream content API settings.

use mosque_directory_content::ContentConfig;
use mosque_directory_core::DEFAULT_MAP_ZOOM;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Content API configuration.
    #[serde(default)]
    pub content: ContentConfig,

    /// Page presentation configuration.
    #[serde(default)]
    pub page: PageConfig,
}

/// Settings for what the detail page links to and how it renders.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Zoom level of the embedded map.
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,

    /// Logo shown in the page footer.
    #[serde(default = "default_logo_url")]
    pub logo_url: String,

    /// Target of the footer's home link.
    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// Render the `info` field as raw HTML instead of escaped text.
    /// Only enable this when the content API is trusted.
    #[serde(default)]
    pub info_as_html: bool,
}

fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

fn default_logo_url() -> String {
    "https://sia.gov.ae/frontEnd/images/mobile-logo.png".to_string()
}

fn default_home_url() -> String {
    "https://sia.gov.ae".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            map_zoom: default_map_zoom(),
            logo_url: default_logo_url(),
            home_url: default_home_url(),
            info_as_html: false,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Nested keys use `__`, e.g. `CONTENT__API_URL` or `PAGE__MAP_ZOOM`.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        config::Environment::default()
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn page_config_has_correct_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.map_zoom, 16);
        assert_eq!(config.home_url, "https://sia.gov.ae");
        assert!(!config.info_as_html);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_source(environment(&[])).expect("loads");
        assert_eq!(config.content.collection(), "mosques");
        assert_eq!(config.page.map_zoom, 16);
    }

    #[test]
    fn nested_keys_override_defaults() {
        let config = ServerConfig::from_source(environment(&[
            ("CONTENT__API_URL", "http://localhost:8055"),
            ("CONTENT__TIMEOUT_SECONDS", "3"),
            ("PAGE__MAP_ZOOM", "12"),
            ("PAGE__INFO_AS_HTML", "true"),
        ]))
        .expect("loads");

        assert_eq!(config.content.api_url(), "http://localhost:8055");
        assert_eq!(config.content.timeout_seconds(), 3);
        assert_eq!(config.content.collection(), "mosques");
        assert_eq!(config.page.map_zoom, 12);
        assert!(config.page.info_as_html);
    }
}
