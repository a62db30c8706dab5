//! Content API access for the mosque directory.
//!
//! This crate provides:
//! - The [`MosqueSource`] trait, the single seam between page rendering and
//!   the upstream CMS
//! - [`DirectusClient`], the HTTP implementation against a Directus
//!   collection endpoint
//! - [`lookup_mosque`], which turns a source result into a [`LookupOutcome`]

pub mod config;
pub mod directus;
pub mod error;
pub mod lookup;
pub mod source;

pub use config::ContentConfig;
pub use directus::DirectusClient;
pub use error::ContentError;
pub use lookup::{LookupOutcome, lookup_mosque};
pub use source::MosqueSource;
