//! Shared application state.

use crate::config::PageConfig;
use crate::types::MosqueDetail;
use mosque_directory_content::{MosqueSource, lookup_mosque};
use mosque_directory_core::{MosqueRecord, asset_url, map_embed_url};
use std::sync::Arc;

/// State shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Where mosque records come from.
    pub source: Arc<dyn MosqueSource>,
    /// Prefix for relative photo paths.
    pub asset_base_url: Arc<str>,
    /// Page presentation settings.
    pub page: Arc<PageConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        source: Arc<dyn MosqueSource>,
        asset_base_url: impl Into<Arc<str>>,
        page: PageConfig,
    ) -> Self {
        Self {
            source,
            asset_base_url: asset_base_url.into(),
            page: Arc::new(page),
        }
    }

    /// Looks up a mosque and resolves its page, or `None` when not found.
    pub async fn load_detail(&self, number: &str) -> Option<MosqueDetail> {
        lookup_mosque(self.source.as_ref(), number)
            .await
            .into_record()
            .map(|record| self.detail_for(record))
    }

    /// Resolves every link a record's page needs.
    pub fn detail_for(&self, record: MosqueRecord) -> MosqueDetail {
        MosqueDetail {
            photo_url: asset_url(&self.asset_base_url, &record.photo),
            map_url: map_embed_url(record.latitude, record.longitude, self.page.map_zoom),
            logo_url: self.page.logo_url.clone(),
            home_url: self.page.home_url.clone(),
            info_as_html: self.page.info_as_html,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mosque_directory_content::ContentError;

    /// Serves one fixed record, nothing, or a failure.
    enum StubSource {
        One(MosqueRecord),
        Empty,
        Broken,
    }

    #[async_trait]
    impl MosqueSource for StubSource {
        async fn find_by_number(
            &self,
            number: &str,
        ) -> mosque_directory_core::Result<Option<MosqueRecord>, ContentError> {
            match self {
                Self::One(record) if record.number == number => Ok(Some(record.clone())),
                Self::One(_) | Self::Empty => Ok(None),
                Self::Broken => Err(ContentError::MalformedResponse {
                    endpoint: "http://cms.invalid/items/mosques".to_string(),
                    reason: "expected value at line 1 column 1".to_string(),
                }
                .into()),
            }
        }
    }

    fn state(source: StubSource) -> AppState {
        AppState::new(
            Arc::new(source),
            "https://cms.example/assets/",
            PageConfig::default(),
        )
    }

    fn record() -> MosqueRecord {
        MosqueRecord {
            name: "Al Noor Mosque".to_string(),
            number: "117".to_string(),
            builded_at: "1998".to_string(),
            location: "Al Majaz".to_string(),
            photo: "abc.jpg".to_string(),
            info: "A community mosque.".to_string(),
            latitude: 25.2,
            longitude: 55.3,
        }
    }

    #[test]
    fn detail_resolves_photo_and_map() {
        let detail = state(StubSource::Empty).detail_for(record());

        assert_eq!(detail.photo_url, "https://cms.example/assets/abc.jpg");
        assert!(detail.map_url.contains("q=25.2,55.3"));
        assert!(detail.map_url.contains("z=16"));
        assert_eq!(detail.home_url, "https://sia.gov.ae");
        assert!(!detail.info_as_html);
    }

    #[tokio::test]
    async fn load_detail_finds_record() {
        let detail = state(StubSource::One(record()))
            .load_detail("117")
            .await
            .expect("record found");

        assert_eq!(detail.record.name, "Al Noor Mosque");
        assert_eq!(detail.photo_url, "https://cms.example/assets/abc.jpg");
    }

    #[tokio::test]
    async fn load_detail_is_none_for_unknown_number() {
        assert!(state(StubSource::One(record())).load_detail("118").await.is_none());
    }

    #[tokio::test]
    async fn load_detail_is_none_when_upstream_fails() {
        assert!(state(StubSource::Broken).load_detail("117").await.is_none());
    }
}
