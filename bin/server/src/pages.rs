//! Page components for the application.
//!
//! Each page is a Leptos component that renders a specific route,
//! along with any server functions specific to that page.

pub mod mosque;
pub mod not_found;

pub use mosque::{MosqueDetailView, MosquePage, get_mosque};
pub use not_found::NotFound;
