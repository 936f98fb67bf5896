//! Dioxus components for browsing movies.
//!
//! Each component lives in `components/<name>/component.rs` next to the
//! stylesheet it loads.

pub mod components;

pub use components::*;
