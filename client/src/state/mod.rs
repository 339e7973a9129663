//! Reactive state shared between components through Leptos context.

pub mod canvas_view;
