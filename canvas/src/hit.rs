#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::WorldPoint;
use crate::doc::{Node, Scene};

/// Whether `world_pt` lies on or inside `node`'s circle.
#[must_use]
pub fn contains(node: &Node, world_pt: WorldPoint) -> bool {
    (world_pt - node.position).length() <= node.radius
}

/// The bubble under `world_pt`, if any.
///
/// Bubbles are tested in scene order and the first match wins, so where two
/// circles overlap the one listed earlier takes the hit.
#[must_use]
pub fn node_at(scene: &Scene, world_pt: WorldPoint) -> Option<&Node> {
    scene.nodes().iter().find(|node| contains(node, world_pt))
}
