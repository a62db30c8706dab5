//! The mosque record as served by the content API.
//!
//! Records are owned by the upstream CMS. This crate only holds a transient,
//! read-only copy for the duration of a single page render.

use serde::{Deserialize, Deserializer, Serialize, de};

/// One mosque entry from the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosqueRecord {
    /// Display name.
    pub name: String,
    /// Public-facing identifier used as the lookup key.
    #[serde(deserialize_with = "deserialize_number")]
    pub number: String,
    /// Free-text construction date.
    pub builded_at: String,
    /// Free-text area or region.
    pub location: String,
    /// Asset path relative to the asset base URL.
    pub photo: String,
    /// Free-text description.
    pub info: String,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub longitude: f64,
}

/// Directus serializes `decimal` columns as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PublicNumber {
    Integer(i64),
    Text(String),
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid coordinate '{text}': {e}"))),
    }
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match PublicNumber::deserialize(deserializer)? {
        PublicNumber::Integer(value) => Ok(value.to_string()),
        PublicNumber::Text(text) => Ok(text),
    }
}
