//! Helper functions for server functions with proper error handling and logging.

use crate::error::PageError;
use crate::state::AppState;
use leptos::prelude::*;

/// Gets the shared application state from the request context.
pub fn get_app_state() -> Result<AppState, PageError> {
    use_context::<AppState>().ok_or_else(|| {
        tracing::error!("AppState was not provided to the request context");
        PageError::StateUnavailable
    })
}
