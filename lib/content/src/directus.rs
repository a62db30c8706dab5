//! Directus collection client.
//!
//! Queries `{api_url}/items/{collection}` with a server-side equality
//! filter on `number`. One request per lookup, no pagination, no retry.

use crate::config::ContentConfig;
use crate::error::ContentError;
use crate::source::MosqueSource;
use async_trait::async_trait;
use mosque_directory_core::{MosqueRecord, Result};
use serde::Deserialize;
use std::time::Duration;

/// Longest upstream error body kept for logs, in bytes.
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Shape of a Directus items response.
#[derive(Debug, Deserialize)]
struct ItemsResponse {
    data: Vec<MosqueRecord>,
}

/// HTTP client for a Directus mosque collection.
#[derive(Debug, Clone)]
pub struct DirectusClient {
    http: reqwest::Client,
    items_url: String,
}

impl DirectusClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not a valid http(s) URL, the
    /// collection name is empty, or the HTTP client cannot be built.
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let api_url = reqwest::Url::parse(config.api_url()).map_err(|e| {
            ContentError::InvalidConfig {
                field: "api_url",
                reason: e.to_string(),
            }
        })?;

        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ContentError::InvalidConfig {
                field: "api_url",
                reason: format!("unsupported scheme '{}'", api_url.scheme()),
            }
            .into());
        }

        let collection = config.collection().trim();
        if collection.is_empty() {
            return Err(ContentError::InvalidConfig {
                field: "collection",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .map_err(|e| ContentError::ClientBuild {
                reason: e.to_string(),
            })?;

        let items_url = format!(
            "{}/items/{}",
            config.api_url().trim_end_matches('/'),
            collection
        );

        Ok(Self { http, items_url })
    }

    /// Returns the collection endpoint this client queries.
    #[must_use]
    pub fn items_url(&self) -> &str {
        &self.items_url
    }
}

/// Cuts an error body down to at most [`MAX_ERROR_BODY_BYTES`], on a char boundary.
fn truncate_error_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_BYTES {
        let mut end = MAX_ERROR_BODY_BYTES;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}

/// Directus filter expressing `number == value`.
fn number_filter(number: &str) -> String {
    serde_json::json!({ "number": { "_eq": number } }).to_string()
}

#[async_trait]
impl MosqueSource for DirectusClient {
    async fn find_by_number(&self, number: &str) -> Result<Option<MosqueRecord>, ContentError> {
        tracing::debug!(
            endpoint = %self.items_url,
            number = %number,
            "Querying mosque collection"
        );

        let response = self
            .http
            .get(&self.items_url)
            .query(&[("filter", number_filter(number))])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ContentError::Timeout {
                        endpoint: self.items_url.clone(),
                    }
                } else {
                    ContentError::ConnectionFailed {
                        endpoint: self.items_url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::UnexpectedStatus {
                endpoint: self.items_url.clone(),
                status: status.as_u16(),
                body: truncate_error_body(body),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentError::ConnectionFailed {
                endpoint: self.items_url.clone(),
                reason: e.to_string(),
            })?;

        let items: ItemsResponse =
            serde_json::from_str(&body).map_err(|e| ContentError::MalformedResponse {
                endpoint: self.items_url.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            number = %number,
            matches = items.data.len(),
            "Mosque collection query finished"
        );

        Ok(items.data.into_iter().next())
    }
}
