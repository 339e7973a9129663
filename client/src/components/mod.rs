//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the viewer surface and its chrome while reading/writing
//! shared state from Leptos context providers.

pub mod canvas_host;
pub mod status_bar;
