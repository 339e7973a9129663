//! Scene model: bubbles, the links between them, and the store that owns both.
//!
//! This module defines the data that describes what is on the canvas
//! (`Node`, `Edge`, `Rgb`), the authored form a scene is loaded from
//! (`SceneData`, usually JSON), and the validated runtime store (`Scene`).
//!
//! Data flows into this layer once at startup (the default scene or a
//! configured one) and is then mutated only by the input engine: dragging
//! moves a node, label editing replaces its text. The renderer reads nodes in
//! list order, which is also the hit-test priority order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::{WorldPoint, WorldVector};
use crate::consts::BUBBLE_RADIUS;

/// Unique identifier for a bubble.
pub type NodeId = u32;

/// Errors raised while building a scene from authored data.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Two nodes share the same id.
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    /// An edge names a node that does not exist.
    #[error("edge {from} -> {to} references unknown node {missing}")]
    DanglingEdge { from: NodeId, to: NodeId, missing: NodeId },
    /// A node radius is zero, negative, or not finite.
    #[error("node {id} has invalid radius {radius}")]
    InvalidRadius { id: NodeId, radius: f64 },
    /// A color string is not of the form `#RRGGBB`.
    #[error("invalid color `{0}`: expected #RRGGBB")]
    InvalidColor(String),
    /// The scene JSON could not be decoded.
    #[error("failed to decode scene: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An opaque RGB color, written as `#RRGGBB` in scene data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidColor`] for anything other than a `#`
    /// followed by exactly six hex digits.
    pub fn from_hex(raw: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(raw.to_owned());
        let digits = raw.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// CSS `rgba(...)` string for this color at the given alpha.
    #[must_use]
    pub fn css_rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = SceneError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_hex(&raw)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A circular bubble on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique, immutable identifier.
    pub id: NodeId,
    /// Text drawn at the bubble center.
    pub label: String,
    /// Center of the bubble in world coordinates.
    pub position: WorldPoint,
    /// Radius in world units. Always positive once inside a [`Scene`].
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Fill and glow color.
    pub color: Rgb,
}

fn default_radius() -> f64 {
    BUBBLE_RADIUS
}

/// A directed link between two bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Scene as authored, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Validated in-memory scene.
///
/// Node ids are unique, radii are positive, and every edge references
/// existing nodes. Nodes are never added or removed after construction, so
/// those guarantees hold for the scene's whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Scene {
    /// Validate authored data into a scene.
    ///
    /// # Errors
    ///
    /// Returns a [`SceneError`] describing the first duplicate id, invalid
    /// radius, or dangling edge found.
    pub fn new(data: SceneData) -> Result<Self, SceneError> {
        let mut ids = HashSet::with_capacity(data.nodes.len());
        for node in &data.nodes {
            if !ids.insert(node.id) {
                return Err(SceneError::DuplicateNode(node.id));
            }
            if !node.radius.is_finite() || node.radius <= 0.0 {
                return Err(SceneError::InvalidRadius { id: node.id, radius: node.radius });
            }
        }
        for edge in &data.edges {
            for end in [edge.from, edge.to] {
                if !ids.contains(&end) {
                    return Err(SceneError::DanglingEdge { from: edge.from, to: edge.to, missing: end });
                }
            }
        }
        Ok(Self { nodes: data.nodes, edges: data.edges })
    }

    /// Decode and validate a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Decode`] for malformed JSON (including bad
    /// colors), or any validation error from [`Scene::new`].
    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        let data: SceneData = serde_json::from_str(raw)?;
        Self::new(data)
    }

    /// A scene with no bubbles.
    #[must_use]
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }

    /// All bubbles in draw and hit-test order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of bubbles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the scene has no bubbles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a bubble by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The designated root bubble: the first one authored.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Move a bubble's center. Returns false if the id is unknown.
    pub fn move_node(&mut self, id: NodeId, position: WorldPoint) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.position = position;
        true
    }

    /// Replace a bubble's label. Returns false if the id is unknown.
    pub fn set_label(&mut self, id: NodeId, label: String) -> bool {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        node.label = label;
        true
    }

    /// Shift every bubble by `by`.
    pub fn translate_all(&mut self, by: WorldVector) {
        for node in &mut self.nodes {
            node.position = node.position + by;
        }
    }

    /// Resolve each edge to its `(from, to)` bubbles, in edge order.
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.edges
            .iter()
            .filter_map(|edge| Some((self.get(edge.from)?, self.get(edge.to)?)))
    }
}

const ROOT_COLOR: Rgb = Rgb::new(0x00, 0xAA, 0xEF);
const BRANCH_COLOR: Rgb = Rgb::new(0x00, 0xFF, 0xCC);

impl Default for Scene {
    /// The starter diagram: one root idea with three branches around it.
    fn default() -> Self {
        let bubble = |id: NodeId, label: &str, x: f64, y: f64, color: Rgb| Node {
            id,
            label: label.to_owned(),
            position: WorldPoint::new(x, y),
            radius: BUBBLE_RADIUS,
            color,
        };
        Self {
            nodes: vec![
                bubble(1, "My Big Idea", 0.0, 0.0, ROOT_COLOR),
                bubble(2, "Market Research", -150.0, 150.0, BRANCH_COLOR),
                bubble(3, "UI/UX Design", 150.0, 150.0, BRANCH_COLOR),
                bubble(4, "Monetization", 0.0, -180.0, BRANCH_COLOR),
            ],
            edges: vec![Edge { from: 1, to: 2 }, Edge { from: 1, to: 3 }, Edge { from: 1, to: 4 }],
        }
    }
}
