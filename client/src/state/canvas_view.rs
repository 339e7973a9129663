//! Canvas viewport telemetry used by non-canvas UI surfaces.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` owns the engine and publishes snapshots through this struct
//! after every handled event so other components (status bar) can render
//! without direct canvas coupling.

#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

use bubblemap_canvas::engine::EngineCore;

/// Live canvas telemetry consumed by chrome (status bar).
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub mode: &'static str,
    pub node_count: usize,
    pub last_render_ms: Option<f64>,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            mode: "idle",
            node_count: 0,
            last_render_ms: None,
        }
    }
}

impl CanvasViewState {
    /// Copy camera, viewport and gesture state out of the engine.
    pub fn observe(&mut self, core: &EngineCore) {
        let camera = core.camera();
        self.zoom = camera.scale();
        self.pan_x = camera.offset().x;
        self.pan_y = camera.offset().y;
        self.viewport_width = core.viewport_width;
        self.viewport_height = core.viewport_height;
        self.mode = core.gesture().mode_name();
        self.node_count = core.scene().len();
    }

    /// Zoom as a whole percentage, e.g. `"110%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }

    /// Screen position of the world origin, rounded to whole pixels.
    #[must_use]
    pub fn pan_label(&self) -> String {
        format!("pan ({:.0}, {:.0})", self.pan_x, self.pan_y)
    }

    /// Viewport size in CSS pixels, e.g. `"800x600"`.
    #[must_use]
    pub fn viewport_label(&self) -> String {
        format!("{:.0}x{:.0}", self.viewport_width, self.viewport_height)
    }

    #[must_use]
    pub fn render_label(&self) -> String {
        match self.last_render_ms {
            Some(ms) => format!("render {ms:.0}ms"),
            None => "render --ms".to_owned(),
        }
    }

    /// Bubble count with the noun agreeing in number.
    #[must_use]
    pub fn node_count_label(&self) -> String {
        match self.node_count {
            1 => "1 bubble".to_owned(),
            n => format!("{n} bubbles"),
        }
    }
}
