//! Shared types used across server functions and UI components.

use mosque_directory_core::MosqueRecord;

/// A mosque record with every external link already resolved.
///
/// Built on the server so the hydrated client never needs server config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MosqueDetail {
    pub record: MosqueRecord,
    /// Banner and detail image.
    pub photo_url: String,
    /// Map embed iframe source.
    pub map_url: String,
    pub logo_url: String,
    pub home_url: String,
    /// Render `record.info` as raw HTML.
    pub info_as_html: bool,
}
