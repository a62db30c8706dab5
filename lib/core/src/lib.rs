//! Core domain types and utilities for the mosque directory.
//!
//! This crate provides the mosque record model, the shared `Result` alias,
//! and the link builders used to resolve images and map embeds. It performs
//! no I/O so it can be shared by the server and the hydrated client.

pub mod error;
pub mod links;
pub mod mosque;

pub use error::Result;
pub use links::{DEFAULT_MAP_ZOOM, asset_url, map_embed_url};
pub use mosque::MosqueRecord;
