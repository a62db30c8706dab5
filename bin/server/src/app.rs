//! Main Leptos application component and routing.

use crate::pages::{MosquePage, NotFound};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    SsrMode,
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="المساجد"/>
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFound/> }>
                    // Async so a not-found status lands before headers are sent.
                    <Route path=path!("/:number") view=MosquePage ssr=SsrMode::Async/>
                </Routes>
            </main>
        </Router>
    }
}
