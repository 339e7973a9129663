#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A point in screen space: CSS pixels relative to the canvas top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another screen point, in pixels.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) / 2.0, y: (self.y + other.y) / 2.0 }
    }
}

/// A point in world space, the coordinate system bubble positions are authored in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    /// The world origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A displacement between two world points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldVector {
    pub dx: f64,
    pub dy: f64,
}

impl WorldVector {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length in world units.
    #[must_use]
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl Sub for WorldPoint {
    type Output = WorldVector;

    fn sub(self, rhs: Self) -> WorldVector {
        WorldVector { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

impl Add<WorldVector> for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: WorldVector) -> WorldPoint {
        WorldPoint { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Sub<WorldVector> for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: WorldVector) -> WorldPoint {
        WorldPoint { x: self.x - rhs.dx, y: self.y - rhs.dy }
    }
}

/// Inclusive range the camera scale is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Build a range, rejecting bounds that are non-finite, non-positive, or inverted.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        valid.then_some(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Clamp `scale` into the range.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: MIN_SCALE, max: MAX_SCALE }
    }
}

/// Camera state for pan/zoom over the diagram.
///
/// `offset` is the screen position of the world origin, in CSS pixels.
/// `scale` is the zoom factor (1.0 = no zoom) and always lies within `limits`;
/// the fields are private so no caller can break that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    offset: ScreenPoint,
    scale: f64,
    limits: ScaleLimits,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ScaleLimits::default())
    }
}

impl Camera {
    /// Identity camera (zero offset, scale 1 clamped into `limits`).
    #[must_use]
    pub fn new(limits: ScaleLimits) -> Self {
        Self { offset: ScreenPoint::default(), scale: limits.clamp(1.0), limits }
    }

    /// Camera with the default limits and the given view. `scale` is clamped.
    #[cfg(test)]
    pub(crate) fn with_view(offset: ScreenPoint, scale: f64) -> Self {
        let limits = ScaleLimits::default();
        Self { offset, scale: limits.clamp(scale), limits }
    }

    #[must_use]
    pub fn offset(&self) -> ScreenPoint {
        self.offset
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Move the world origin to `offset` (screen space).
    pub fn pan_to(&mut self, offset: ScreenPoint) {
        self.offset = offset;
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: ScreenPoint) -> WorldPoint {
        WorldPoint { x: (screen.x - self.offset.x) / self.scale, y: (screen.y - self.offset.y) / self.scale }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        ScreenPoint { x: world.x * self.scale + self.offset.x, y: world.y * self.scale + self.offset.y }
    }

    /// Multiply the scale by `factor` while keeping the world point under
    /// `anchor` (screen space) fixed on screen.
    ///
    /// The offset correction is derived from the scale actually applied after
    /// clamping, so the anchor stays put even when the limits swallow part of
    /// the requested factor. Factors that are not finite and positive leave
    /// the camera untouched.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let world_before = self.screen_to_world(anchor);
        self.scale = self.limits.clamp(self.scale * factor);
        let world_after = self.screen_to_world(anchor);
        let drift = world_after - world_before;
        self.offset.x += drift.dx * self.scale;
        self.offset.y += drift.dy * self.scale;
    }
}
