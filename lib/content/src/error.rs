//! Error types for the content crate.
//!
//! Errors are designed for layered context using rootcause. The lookup
//! flow never surfaces these to a visitor; they exist for operator logs.

use std::fmt;

/// Errors from talking to the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Content API configuration is unusable.
    InvalidConfig { field: &'static str, reason: String },
    /// The HTTP client could not be constructed.
    ClientBuild { reason: String },
    /// Connection to the content API failed.
    ConnectionFailed { endpoint: String, reason: String },
    /// The content API did not answer in time.
    Timeout { endpoint: String },
    /// The content API answered with a non-success status.
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The response body did not match the expected collection shape.
    MalformedResponse { endpoint: String, reason: String },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid content config '{field}': {reason}")
            }
            Self::ClientBuild { reason } => {
                write!(f, "failed to build http client: {reason}")
            }
            Self::ConnectionFailed { endpoint, reason } => {
                write!(f, "failed to connect to '{endpoint}': {reason}")
            }
            Self::Timeout { endpoint } => write!(f, "request to '{endpoint}' timed out"),
            Self::UnexpectedStatus {
                endpoint,
                status,
                body,
            } => {
                write!(f, "'{endpoint}' returned HTTP {status}: {body}")
            }
            Self::MalformedResponse { endpoint, reason } => {
                write!(f, "malformed response from '{endpoint}': {reason}")
            }
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display() {
        let err = ContentError::UnexpectedStatus {
            endpoint: "https://cms.example/items/mosques".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert!(err.to_string().contains("HTTP 500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn invalid_config_names_field() {
        let err = ContentError::InvalidConfig {
            field: "collection",
            reason: "must not be empty".to_string(),
        };
        assert!(err.to_string().contains("'collection'"));
    }
}
