#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn parse(value: &serde_json::Value) -> Result<ViewerConfig, ConfigError> {
    ViewerConfig::from_json(&value.to_string())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_consts() {
    let config = ViewerConfig::default();
    assert_eq!(config.min_scale, 0.3);
    assert_eq!(config.max_scale, 3.0);
    assert_eq!(config.zoom_step, 1.1);
    assert_eq!(config.double_tap_ms, 300.0);
    assert_eq!(config.log_level, log::Level::Info);
    assert!(config.scene.is_none());
}

#[test]
fn default_is_valid() {
    assert!(ViewerConfig::default().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    assert!(parse(&json!({})).is_ok_and(|c| c == ViewerConfig::default()));
}

#[test]
fn partial_object_keeps_other_defaults() {
    let config = parse(&json!({ "max_scale": 5.0, "log_level": "debug" }));
    assert!(config.is_ok_and(|c| c.max_scale == 5.0 && c.min_scale == 0.3 && c.log_level == log::Level::Debug));
}

#[test]
fn build_scene_without_override_is_default() {
    assert!(ViewerConfig::default().build_scene().is_ok_and(|s| s == Scene::default()));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn rejects_inverted_scale_limits() {
    let result = parse(&json!({ "min_scale": 2.0, "max_scale": 1.0 }));
    assert!(matches!(result, Err(ConfigError::ScaleLimits { .. })));
}

#[test]
fn rejects_zero_min_scale() {
    assert!(matches!(parse(&json!({ "min_scale": 0.0 })), Err(ConfigError::ScaleLimits { .. })));
}

#[test]
fn rejects_zoom_step_at_or_below_one() {
    assert!(matches!(parse(&json!({ "zoom_step": 1.0 })), Err(ConfigError::ZoomStep(_))));
    assert!(matches!(parse(&json!({ "zoom_step": 0.5 })), Err(ConfigError::ZoomStep(_))));
}

#[test]
fn rejects_negative_double_tap_window() {
    assert!(matches!(parse(&json!({ "double_tap_ms": -1.0 })), Err(ConfigError::DoubleTap(_))));
}

#[test]
fn zero_double_tap_window_is_allowed() {
    assert!(parse(&json!({ "double_tap_ms": 0.0 })).is_ok());
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(ViewerConfig::from_json("{"), Err(ConfigError::Decode(_))));
}

#[test]
fn rejects_wrong_field_type() {
    assert!(matches!(parse(&json!({ "zoom_step": "fast" })), Err(ConfigError::Decode(_))));
}

#[test]
fn scale_limits_reflect_config() {
    let config = ViewerConfig { min_scale: 0.5, max_scale: 2.0, ..ViewerConfig::default() };
    assert!(config.scale_limits().is_ok_and(|l| l.min() == 0.5 && l.max() == 2.0));
}

// =============================================================
// Scene override
// =============================================================

#[test]
fn scene_override_is_loaded() {
    let config = parse(&json!({
        "scene": {
            "nodes": [
                { "id": 10, "label": "Alpha", "position": { "x": 0, "y": 0 }, "color": "#FF0000" },
                { "id": 11, "label": "Beta", "position": { "x": 200, "y": 0 }, "color": "#00FF00", "radius": 40 }
            ],
            "edges": [{ "from": 10, "to": 11 }]
        }
    }));
    let scene = config.and_then(|c| c.build_scene());
    assert!(scene.is_ok_and(|s| s.len() == 2 && s.get(11).is_some_and(|n| n.radius == 40.0)));
}

#[test]
fn scene_override_dangling_edge_is_rejected() {
    let result = parse(&json!({
        "scene": {
            "nodes": [{ "id": 1, "label": "Only", "position": { "x": 0, "y": 0 }, "color": "#FFFFFF" }],
            "edges": [{ "from": 1, "to": 2 }]
        }
    }));
    assert!(matches!(result, Err(ConfigError::Scene(SceneError::DanglingEdge { .. }))));
}

#[test]
fn scene_override_bad_color_is_decode_error() {
    let result = parse(&json!({
        "scene": { "nodes": [{ "id": 1, "label": "x", "position": { "x": 0, "y": 0 }, "color": "red" }] }
    }));
    assert!(matches!(result, Err(ConfigError::Decode(_))));
}
