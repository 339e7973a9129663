use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, ScreenPoint, WorldPoint};
use crate::config::{ConfigError, ViewerConfig};
use crate::consts::WHEEL_ZOOM_STEP;
use crate::doc::{Node, NodeId, Scene};
use crate::hit;
use crate::input::{Cursor, GestureState, LabelEdit, TapTracker, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scene or camera changed; repaint.
    RenderNeeded,
    /// Show this cursor over the canvas.
    SetCursor(Cursor),
    /// Ask the user for a new label, then call `commit_label` with the answer.
    EditLabelRequested { id: NodeId, label: String },
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub gesture: GestureState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    taps: TapTracker,
    zoom_step: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_scene(Scene::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with stock tunables showing `scene`.
    #[must_use]
    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            camera: Camera::default(),
            gesture: GestureState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            taps: TapTracker::default(),
            zoom_step: WHEEL_ZOOM_STEP,
        }
    }

    /// Engine built from a viewer config.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, if any.
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut core = Self::with_scene(config.build_scene()?);
        core.camera = Camera::new(config.scale_limits()?);
        core.taps = TapTracker::new(config.double_tap_ms);
        core.zoom_step = config.zoom_step;
        Ok(core)
    }

    // --- Viewport ---

    /// Record the viewport size in CSS pixels and device pixel ratio.
    ///
    /// While the root bubble still sits exactly on the world origin, every
    /// bubble is shifted by the viewport center so the diagram opens centered.
    /// Once moved, the root no longer matches and later resizes leave the
    /// scene alone.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;

        if self.scene.root().is_some_and(|root| root.position == WorldPoint::ORIGIN) {
            let center = WorldPoint::new(width_css / 2.0, height_css / 2.0);
            self.scene.translate_all(center - WorldPoint::ORIGIN);
            log::debug!("centered scene on viewport ({width_css}x{height_css})");
        }

        vec![Action::RenderNeeded]
    }

    // --- Pointer ---

    /// Press at `screen_pt`. A press on a bubble starts dragging it; anywhere
    /// else starts panning. A press on a bubble within the double-tap window of
    /// the previous press also requests a label edit.
    pub fn on_pointer_down(&mut self, screen_pt: ScreenPoint, now_ms: f64) -> Vec<Action> {
        let is_double = self.taps.register(now_ms);
        let world_pt = self.camera.screen_to_world(screen_pt);
        let mut edit = None;

        match hit::node_at(&self.scene, world_pt) {
            Some(node) => {
                let (id, grab_offset_world) = (node.id, world_pt - node.position);
                if is_double {
                    edit = Some(Action::EditLabelRequested { id, label: node.label.clone() });
                }
                self.set_gesture(GestureState::DraggingNode { id, grab_offset_world });
            }
            None => {
                self.set_gesture(GestureState::PanningCamera {
                    pointer_anchor_screen: screen_pt,
                    camera_offset_at_start: self.camera.offset(),
                });
            }
        }

        let mut actions = vec![Action::SetCursor(self.gesture.cursor())];
        actions.extend(edit);
        actions
    }

    /// Pointer moved to `screen_pt`. Only dragging and panning react.
    pub fn on_pointer_move(&mut self, screen_pt: ScreenPoint) -> Vec<Action> {
        match self.gesture {
            GestureState::DraggingNode { id, grab_offset_world } => {
                let target = self.camera.screen_to_world(screen_pt) - grab_offset_world;
                self.scene.move_node(id, target);
                vec![Action::RenderNeeded]
            }
            GestureState::PanningCamera { pointer_anchor_screen, camera_offset_at_start } => {
                self.camera.pan_to(ScreenPoint::new(
                    screen_pt.x - (pointer_anchor_screen.x - camera_offset_at_start.x),
                    screen_pt.y - (pointer_anchor_screen.y - camera_offset_at_start.y),
                ));
                vec![Action::RenderNeeded]
            }
            GestureState::Idle | GestureState::Pinching { .. } => Vec::new(),
        }
    }

    /// Pointer released: always back to idle.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.set_gesture(GestureState::Idle);
        vec![Action::SetCursor(self.gesture.cursor())]
    }

    /// Wheel at `screen_pt`: one zoom step in for negative `dy`, out otherwise,
    /// anchored under the pointer.
    pub fn on_wheel(&mut self, screen_pt: ScreenPoint, delta: WheelDelta) -> Vec<Action> {
        let factor = if delta.dy < 0.0 { self.zoom_step } else { 1.0 / self.zoom_step };
        self.camera.zoom_at(screen_pt, factor);
        vec![Action::RenderNeeded]
    }

    // --- Touch ---

    /// Touches began. `touches` lists every finger currently down.
    pub fn on_touch_start(&mut self, touches: &[ScreenPoint], now_ms: f64) -> Vec<Action> {
        match touches {
            [] => Vec::new(),
            [single] => self.on_pointer_down(*single, now_ms),
            [a, b, ..] => {
                self.set_gesture(GestureState::Pinching { last_distance: a.distance_to(*b) });
                Vec::new()
            }
        }
    }

    /// Touches moved. With one finger this behaves like a pointer move; with
    /// two or more it pinch-zooms around their midpoint.
    pub fn on_touch_move(&mut self, touches: &[ScreenPoint]) -> Vec<Action> {
        match touches {
            [] => Vec::new(),
            [single] => self.on_pointer_move(*single),
            [a, b, ..] => {
                let distance = a.distance_to(*b);
                let previous = match self.gesture {
                    GestureState::Pinching { last_distance } => Some(last_distance),
                    _ => None,
                };
                self.set_gesture(GestureState::Pinching { last_distance: distance });

                match previous {
                    Some(last) if last > 0.0 => {
                        self.camera.zoom_at(a.midpoint(*b), distance / last);
                        vec![Action::RenderNeeded]
                    }
                    Some(_) => {
                        log::trace!("pinch from zero distance ignored");
                        Vec::new()
                    }
                    None => Vec::new(),
                }
            }
        }
    }

    /// Touch ended or was cancelled: always back to idle.
    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Labels ---

    /// Apply the outcome of a label edit. Cancelled or blank edits leave the
    /// label alone and request nothing.
    pub fn commit_label(&mut self, id: NodeId, edit: &LabelEdit) -> Vec<Action> {
        let Some(text) = edit.accepted_text() else {
            log::trace!("label edit for node {id} discarded");
            return Vec::new();
        };
        if !self.scene.set_label(id, text.to_owned()) {
            log::warn!("label edit for unknown node {id}");
            return Vec::new();
        }
        log::debug!("node {id} relabeled to {text:?}");
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The active gesture.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Look up a bubble by ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.scene.get(id)
    }

    fn set_gesture(&mut self, next: GestureState) {
        if self.gesture.mode_name() != next.mode_name() {
            log::debug!("gesture {} -> {}", self.gesture.mode_name(), next.mode_name());
        }
        self.gesture = next;
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine with the default scene bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Create an engine configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, if any.
    pub fn from_config(canvas: HtmlCanvasElement, config: &ViewerConfig) -> Result<Self, ConfigError> {
        Ok(Self { canvas, core: EngineCore::from_config(config)? })
    }

    // --- Viewport ---

    /// Resize the backing store to the viewport in device pixels and update the core.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
        self.core.set_viewport(width_css, height_css, dpr)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: ScreenPoint, now_ms: f64) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, now_ms)
    }

    pub fn on_pointer_move(&mut self, screen_pt: ScreenPoint) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_wheel(&mut self, screen_pt: ScreenPoint, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    pub fn on_touch_start(&mut self, touches: &[ScreenPoint], now_ms: f64) -> Vec<Action> {
        self.core.on_touch_start(touches, now_ms)
    }

    pub fn on_touch_move(&mut self, touches: &[ScreenPoint]) -> Vec<Action> {
        self.core.on_touch_move(touches)
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.core.on_touch_end()
    }

    pub fn commit_label(&mut self, id: NodeId, edit: &LabelEdit) -> Vec<Action> {
        self.core.commit_label(id, edit)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context cannot be obtained or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.canvas.get_context("2d")? else {
            return Ok(());
        };
        let ctx = ctx.dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.scene,
            &self.core.camera,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.core.scene()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.core.gesture()
    }
}
