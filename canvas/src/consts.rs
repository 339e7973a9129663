//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed camera scale.
pub const MIN_SCALE: f64 = 0.3;

/// Largest allowed camera scale.
pub const MAX_SCALE: f64 = 3.0;

/// Multiplicative zoom applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Gestures ────────────────────────────────────────────────────

/// Two down-events closer together than this (milliseconds) count as a double activation.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

// ── Scene ───────────────────────────────────────────────────────

/// Default bubble radius in world units.
pub const BUBBLE_RADIUS: f64 = 60.0;

// ── Rendering ───────────────────────────────────────────────────

/// Link stroke width in world units.
pub const EDGE_WIDTH: f64 = 3.0;

/// Alpha of the gradient color stops on links.
pub const EDGE_ALPHA: f64 = 0.6;

/// Shadow blur of the bubble glow, in canvas pixels.
pub const GLOW_BLUR: f64 = 30.0;

/// Alpha of the translucent overlay painted over each bubble.
pub const OVERLAY_ALPHA: f64 = 0.5;

/// Font used for bubble labels.
pub const LABEL_FONT: &str = "bold 14px sans-serif";

/// Fill color used for bubble labels.
pub const LABEL_COLOR: &str = "white";
