//! Input model: wheel deltas, cursors, double-tap tracking, label edits, and
//! the gesture state machine.
//!
//! `GestureState` is the active gesture tracked between press and release. Each
//! variant carries the context captured at gesture start that later moves need
//! to compute absolute positions, so no incremental drift accumulates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{ScreenPoint, WorldVector};
use crate::consts::DOUBLE_TAP_WINDOW_MS;
use crate::doc::NodeId;

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Canvas cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Resting state: something can be grabbed.
    #[default]
    Grab,
    /// A pan or drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Internal state for the gesture state machine.
///
/// At most one gesture is active at a time; the variants are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging empty canvas moves the camera.
    PanningCamera {
        /// Screen position of the pointer when the pan began.
        pointer_anchor_screen: ScreenPoint,
        /// Camera offset when the pan began.
        camera_offset_at_start: ScreenPoint,
    },
    /// Dragging a bubble moves it through world space.
    DraggingNode {
        /// Bubble being dragged.
        id: NodeId,
        /// Pointer world position minus bubble center at grab time.
        grab_offset_world: WorldVector,
    },
    /// Two fingers down: pinch zoom around their midpoint.
    Pinching {
        /// Finger separation at the previous touch event, in screen pixels.
        last_distance: f64,
    },
}

impl GestureState {
    /// Short name for status display and logs.
    #[must_use]
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PanningCamera { .. } => "panning",
            Self::DraggingNode { .. } => "dragging",
            Self::Pinching { .. } => "pinching",
        }
    }

    /// Cursor to show while this gesture is active.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        match self {
            Self::PanningCamera { .. } | Self::DraggingNode { .. } => Cursor::Grabbing,
            Self::Idle | Self::Pinching { .. } => Cursor::Grab,
        }
    }
}

/// Detects a second press arriving shortly after the previous one.
///
/// Every press restarts the window, so a run of rapid presses reports a
/// double tap on each press after the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapTracker {
    last_down_ms: Option<f64>,
    window_ms: f64,
}

impl Default for TapTracker {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW_MS)
    }
}

impl TapTracker {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { last_down_ms: None, window_ms }
    }

    /// Record a press at `now_ms`. Returns `true` when it follows the previous
    /// press by strictly less than the window.
    pub fn register(&mut self, now_ms: f64) -> bool {
        let is_double = self.last_down_ms.is_some_and(|last| now_ms - last < self.window_ms);
        self.last_down_ms = Some(now_ms);
        is_double
    }
}

/// Outcome of asking the user for a new bubble label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEdit {
    /// The prompt was dismissed.
    Cancelled,
    /// The user confirmed this raw text.
    Submitted(String),
}

impl LabelEdit {
    /// Map a prompt result (`None` when dismissed) to an edit.
    #[must_use]
    pub fn from_prompt(response: Option<String>) -> Self {
        response.map_or(Self::Cancelled, Self::Submitted)
    }

    /// Trimmed text to store, or `None` when the edit should leave the label alone.
    #[must_use]
    pub fn accepted_text(&self) -> Option<&str> {
        match self {
            Self::Cancelled => None,
            Self::Submitted(raw) => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
        }
    }
}
