//! Content API configuration.
//!
//! Fields with defaults can be omitted when loading from environment variables.

use serde::{Deserialize, Serialize};

/// Configuration for the upstream Directus instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the Directus API (e.g., "https://cms.example.com/directus").
    #[serde(default = "default_api_url")]
    api_url: String,
    /// Name of the collection holding mosque records.
    #[serde(default = "default_collection")]
    collection: String,
    /// Prefix that relative asset paths are appended to.
    #[serde(default = "default_asset_base_url")]
    asset_base_url: String,
    /// Request timeout for the content API, in seconds.
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

fn default_api_url() -> String {
    "https://sia.gov.ae/directus".to_string()
}

fn default_collection() -> String {
    "mosques".to_string()
}

fn default_asset_base_url() -> String {
    "https://sia.gov.ae/directus/assets/".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            collection: default_collection(),
            asset_base_url: default_asset_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ContentConfig {
    /// Creates a configuration for the given API, with defaults elsewhere.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Sets the collection name.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the asset base URL.
    #[must_use]
    pub fn with_asset_base_url(mut self, asset_base_url: impl Into<String>) -> Self {
        self.asset_base_url = asset_base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub fn asset_base_url(&self) -> &str {
        &self.asset_base_url
    }

    #[must_use]
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_directus() {
        let config = ContentConfig::default();
        assert_eq!(config.api_url(), "https://sia.gov.ae/directus");
        assert_eq!(config.collection(), "mosques");
        assert_eq!(
            config.asset_base_url(),
            "https://sia.gov.ae/directus/assets/"
        );
        assert_eq!(config.timeout_seconds(), 10);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: ContentConfig =
            serde_json::from_str(r#"{"api_url": "http://localhost:8055"}"#).expect("valid");
        assert_eq!(config.api_url(), "http://localhost:8055");
        assert_eq!(config.collection(), "mosques");
    }
}
