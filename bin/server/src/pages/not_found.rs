//! Not-found page component.

use leptos::prelude::*;

/// Shown for unknown numbers, failed lookups, and unmatched routes.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found"</p>
        </div>
    }
}
