//! Canvas viewport synchronization helpers shared by canvas host.
//!
//! These helpers bridge the Leptos reactive world and the imperative canvas engine. All but
//! `usable_dpr` are `#[cfg(feature = "csr")]` because they depend on `web_sys` and Leptos
//! signals that only exist in the browser.

#[cfg(test)]
#[path = "canvas_viewport_test.rs"]
mod canvas_viewport_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::canvas_view::CanvasViewState;

#[cfg(feature = "csr")]
use bubblemap_canvas::engine::{Action, Engine};

/// Read the canvas element's CSS dimensions and device pixel ratio, then push them to the engine.
///
/// Must be called on mount and on every resize so the backing store matches the display. Uses
/// CSS pixel dimensions (`client_width` / `client_height`); the engine multiplies by DPR when
/// sizing the backing store. The first call also recenters the default scene on the viewport.
#[cfg(feature = "csr")]
pub fn sync_viewport(engine: &mut Engine, canvas: &web_sys::HtmlCanvasElement) -> Vec<Action> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = usable_dpr(window.device_pixel_ratio());
    engine.set_viewport(width, height, dpr)
}

/// Device pixel ratio to size the backing store with. Ratios below 1 (a
/// zoomed-out browser) are kept; only unusable values fall back to 1.
#[must_use]
pub fn usable_dpr(reported: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 { reported } else { 1.0 }
}

/// Publish the engine's camera, viewport and gesture mode to the status telemetry signal.
#[cfg(feature = "csr")]
pub fn sync_canvas_view_state(engine: &Engine, canvas_view: RwSignal<CanvasViewState>) {
    canvas_view.update(|v| v.observe(&engine.core));
}

/// Return the current wall-clock time in milliseconds via the JS `Date.now()` API.
#[cfg(feature = "csr")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
