//! Viewer configuration: zoom limits, wheel step, double-tap window, log level,
//! and an optional scene to load instead of the built-in one.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock viewer.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::ScaleLimits;
use crate::consts::{DOUBLE_TAP_WINDOW_MS, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_STEP};
use crate::doc::{Scene, SceneData, SceneError};

/// Errors raised while loading or validating a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scale limits: min {min}, max {max}")]
    ScaleLimits { min: f64, max: f64 },
    #[error("zoom step must be finite and greater than 1, got {0}")]
    ZoomStep(f64),
    #[error("double-tap window must be finite and non-negative, got {0}")]
    DoubleTap(f64),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("failed to decode config: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Tunables for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Smallest allowed camera scale.
    pub min_scale: f64,
    /// Largest allowed camera scale.
    pub max_scale: f64,
    /// Multiplicative zoom per wheel notch.
    pub zoom_step: f64,
    /// Two presses closer than this (milliseconds) count as a double tap.
    pub double_tap_ms: f64,
    /// Console log level for the host.
    pub log_level: log::Level,
    /// Scene to show instead of the default one.
    pub scene: Option<SceneData>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_step: WHEEL_ZOOM_STEP,
            double_tap_ms: DOUBLE_TAP_WINDOW_MS,
            log_level: log::Level::Info,
            scene: None,
        }
    }
}

impl ViewerConfig {
    /// Decode a config from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Decode`] for malformed JSON, or whatever
    /// [`ViewerConfig::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges and the scene override.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range, or the scene's
    /// validation error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scale_limits()?;
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        if !self.double_tap_ms.is_finite() || self.double_tap_ms < 0.0 {
            return Err(ConfigError::DoubleTap(self.double_tap_ms));
        }
        if let Some(data) = &self.scene {
            Scene::new(data.clone())?;
        }
        Ok(())
    }

    /// The configured zoom range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ScaleLimits`] if the bounds are not finite,
    /// positive, and ordered.
    pub fn scale_limits(&self) -> Result<ScaleLimits, ConfigError> {
        ScaleLimits::new(self.min_scale, self.max_scale)
            .ok_or(ConfigError::ScaleLimits { min: self.min_scale, max: self.max_scale })
    }

    /// The scene to start with: the override if present, else the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Scene`] if the override fails validation.
    pub fn build_scene(&self) -> Result<Scene, ConfigError> {
        match &self.scene {
            Some(data) => Ok(Scene::new(data.clone())?),
            None => Ok(Scene::default()),
        }
    }
}
