//! The lookup seam between page rendering and the content API.

use crate::error::ContentError;
use async_trait::async_trait;
use mosque_directory_core::{MosqueRecord, Result};

/// A read-only source of mosque records.
///
/// Implementations distinguish an absent record (`Ok(None)`) from a failed
/// query (`Err`). Callers decide whether to collapse the two.
#[async_trait]
pub trait MosqueSource: Send + Sync {
    /// Returns the first record whose `number` equals `number` exactly.
    async fn find_by_number(&self, number: &str) -> Result<Option<MosqueRecord>, ContentError>;
}
