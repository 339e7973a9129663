#![allow(clippy::float_cmp)]

use super::*;
use bubblemap_canvas::camera::ScreenPoint;
use bubblemap_canvas::doc::Scene;
use bubblemap_canvas::input::WheelDelta;

#[test]
fn canvas_view_state_defaults_are_neutral() {
    let state = CanvasViewState::default();
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.pan_x, 0.0);
    assert_eq!(state.pan_y, 0.0);
    assert_eq!(state.viewport_width, 0.0);
    assert_eq!(state.viewport_height, 0.0);
    assert_eq!(state.mode, "idle");
    assert_eq!(state.node_count, 0);
    assert!(state.last_render_ms.is_none());
}

#[test]
fn observe_copies_engine_state() {
    let mut core = EngineCore::new();
    core.set_viewport(800.0, 600.0, 2.0);
    core.on_wheel(ScreenPoint::new(400.0, 300.0), WheelDelta { dx: 0.0, dy: -1.0 });
    core.on_pointer_down(ScreenPoint::new(400.0, 300.0), 0.0);

    let mut state = CanvasViewState::default();
    state.observe(&core);

    assert!((state.zoom - 1.1).abs() < 1e-9);
    assert_eq!(state.pan_x, core.camera().offset().x);
    assert_eq!(state.pan_y, core.camera().offset().y);
    assert_eq!((state.viewport_width, state.viewport_height), (800.0, 600.0));
    assert_eq!(state.mode, "dragging");
    assert_eq!(state.node_count, 4);
}

#[test]
fn observe_keeps_render_timing() {
    let mut state = CanvasViewState { last_render_ms: Some(2.5), ..CanvasViewState::default() };
    state.observe(&EngineCore::with_scene(Scene::empty()));
    assert_eq!(state.last_render_ms, Some(2.5));
    assert_eq!(state.node_count, 0);
}

#[test]
fn zoom_label_rounds_to_whole_percent() {
    let state = CanvasViewState { zoom: 1.1, ..CanvasViewState::default() };
    assert_eq!(state.zoom_label(), "110%");
    let state = CanvasViewState { zoom: 0.3, ..CanvasViewState::default() };
    assert_eq!(state.zoom_label(), "30%");
}

#[test]
fn node_count_label_pluralizes() {
    let one = CanvasViewState { node_count: 1, ..CanvasViewState::default() };
    let four = CanvasViewState { node_count: 4, ..CanvasViewState::default() };
    let none = CanvasViewState::default();
    assert_eq!(one.node_count_label(), "1 bubble");
    assert_eq!(four.node_count_label(), "4 bubbles");
    assert_eq!(none.node_count_label(), "0 bubbles");
}

#[test]
fn pan_label_rounds_offset() {
    let state = CanvasViewState { pan_x: 400.4, pan_y: -12.6, ..CanvasViewState::default() };
    assert_eq!(state.pan_label(), "pan (400, -13)");
}

#[test]
fn viewport_label_reflects_observed_engine() {
    let mut core = EngineCore::new();
    core.set_viewport(1280.0, 720.0, 1.0);
    let mut state = CanvasViewState::default();
    state.observe(&core);
    assert_eq!(state.viewport_label(), "1280x720");
    assert_eq!(state.pan_label(), "pan (0, 0)");
}

#[test]
fn render_label_shows_placeholder_until_first_render() {
    let mut state = CanvasViewState::default();
    assert_eq!(state.render_label(), "render --ms");
    state.last_render_ms = Some(3.4);
    assert_eq!(state.render_label(), "render 3ms");
}
