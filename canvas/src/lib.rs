//! Viewport and gesture engine for the bubble diagram viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive core of the diagram: translating raw pointer, wheel and touch
//! events into camera and node mutations, keeping zoom anchored under the
//! cursor or pinch midpoint, hit-testing bubbles, and painting the scene. The
//! host layer (the `bubblemap-client` crate) only wires DOM events to the
//! engine and carries out the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene model: bubbles, links, colors |
//! | [`camera`] | Pan/zoom camera and screen/world coordinate types |
//! | [`input`] | Gesture state machine types, cursors, label edits |
//! | [`hit`] | Hit-testing against bubbles |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`config`] | Viewer configuration loaded from JSON |
//! | [`consts`] | Shared numeric constants (zoom limits, radii, styling) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
