//! Domain error types for server operations.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors raised while serving a page.
#[derive(Debug)]
pub enum PageError {
    /// Shared application state was not provided to the request.
    StateUnavailable,
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateUnavailable => write!(f, "application state missing from request context"),
        }
    }
}

impl std::error::Error for PageError {}

impl PageError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            PageError::StateUnavailable => ServerFnError::new("Service unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_unavailable_hides_details_from_visitors() {
        let err = PageError::StateUnavailable;
        assert!(err.to_string().contains("request context"));
        let server_err = err.into_server_error();
        assert!(!server_err.to_string().contains("request context"));
    }
}
