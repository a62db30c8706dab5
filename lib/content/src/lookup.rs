//! Lookup flow for a single mosque page.
//!
//! `Start -> Fetching -> {Found | NotFound}`. Absent records and failed
//! queries are kept apart in [`LookupOutcome`] for logging but both count as
//! "not found" for rendering.

use crate::source::MosqueSource;
use mosque_directory_core::MosqueRecord;

/// Result of looking up one mosque by number.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The first upstream match.
    Found(MosqueRecord),
    /// The query succeeded with zero matches.
    Missing,
    /// The query failed; the failure has already been logged.
    Failed,
}

impl LookupOutcome {
    /// Returns the record, collapsing both not-found causes into `None`.
    #[must_use]
    pub fn into_record(self) -> Option<MosqueRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Missing | Self::Failed => None,
        }
    }
}

/// Looks up a mosque by its public number.
///
/// Issues exactly one query. A failed query produces exactly one
/// error-level log event and never propagates to the caller.
pub async fn lookup_mosque<S>(source: &S, number: &str) -> LookupOutcome
where
    S: MosqueSource + ?Sized,
{
    match source.find_by_number(number).await {
        Ok(Some(record)) => LookupOutcome::Found(record),
        Ok(None) => {
            tracing::debug!(number = %number, "No mosque matches number");
            LookupOutcome::Missing
        }
        Err(e) => {
            tracing::error!(number = %number, error = %e, "Failed to fetch mosque");
            LookupOutcome::Failed
        }
    }
}
