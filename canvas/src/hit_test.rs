#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{Edge, NodeId, Rgb, SceneData};

fn bubble(id: NodeId, x: f64, y: f64, radius: f64) -> Node {
    Node { id, label: String::new(), position: WorldPoint::new(x, y), radius, color: Rgb::new(0, 0, 0) }
}

fn scene(nodes: Vec<Node>) -> Scene {
    Scene::new(SceneData { nodes, edges: Vec::<Edge>::new() }).unwrap_or_else(|_| Scene::empty())
}

fn hit_id(scene: &Scene, x: f64, y: f64) -> Option<NodeId> {
    node_at(scene, WorldPoint::new(x, y)).map(|n| n.id)
}

// =============================================================
// contains
// =============================================================

#[test]
fn contains_center() {
    assert!(contains(&bubble(1, 10.0, 10.0, 5.0), WorldPoint::new(10.0, 10.0)));
}

#[test]
fn contains_exactly_on_boundary() {
    assert!(contains(&bubble(1, 0.0, 0.0, 60.0), WorldPoint::new(60.0, 0.0)));
    assert!(contains(&bubble(1, 0.0, 0.0, 5.0), WorldPoint::new(3.0, 4.0)));
}

#[test]
fn contains_just_outside_boundary() {
    assert!(!contains(&bubble(1, 0.0, 0.0, 60.0), WorldPoint::new(60.0 + 1e-9, 0.0)));
}

#[test]
fn contains_uses_circle_not_bounding_box() {
    // Corner of the bounding square is outside the circle.
    assert!(!contains(&bubble(1, 0.0, 0.0, 10.0), WorldPoint::new(9.0, 9.0)));
}

// =============================================================
// node_at
// =============================================================

#[test]
fn node_at_empty_scene_misses() {
    assert_eq!(hit_id(&Scene::empty(), 0.0, 0.0), None);
}

#[test]
fn node_at_default_scene_root() {
    let scene = Scene::default();
    assert_eq!(hit_id(&scene, 0.0, 0.0), Some(1));
    assert_eq!(hit_id(&scene, 0.0, -180.0), Some(4));
}

#[test]
fn node_at_default_scene_gap_misses() {
    // Between the root and the top bubble: 90 from both centers.
    assert_eq!(hit_id(&Scene::default(), 0.0, -90.0), None);
}

#[test]
fn node_at_overlap_prefers_earlier_node() {
    let scene = scene(vec![bubble(1, 0.0, 0.0, 50.0), bubble(2, 40.0, 0.0, 50.0)]);
    assert_eq!(hit_id(&scene, 20.0, 0.0), Some(1));
}

#[test]
fn node_at_overlap_order_is_list_order_not_id() {
    let scene = scene(vec![bubble(9, 40.0, 0.0, 50.0), bubble(1, 0.0, 0.0, 50.0)]);
    assert_eq!(hit_id(&scene, 20.0, 0.0), Some(9));
}

#[test]
fn node_at_respects_per_node_radius() {
    let scene = scene(vec![bubble(1, 0.0, 0.0, 5.0), bubble(2, 100.0, 0.0, 80.0)]);
    assert_eq!(hit_id(&scene, 30.0, 0.0), Some(2));
    assert_eq!(hit_id(&scene, 6.0, 0.0), None);
}
