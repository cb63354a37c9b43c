//! Viewport configuration.
//!
//! Zoom bounds and the zoom increment are configuration, not part of the
//! solver. Values are serde-friendly so the application config can embed them.

use serde::{Deserialize, Serialize};

use crate::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Bounds and increment used by the zoom solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Smallest allowed zoom factor
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,

    /// Largest allowed zoom factor
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,

    /// Additive zoom change per step
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
}

fn default_min_zoom() -> f32 {
    ZOOM_MIN
}

fn default_max_zoom() -> f32 {
    ZOOM_MAX
}

fn default_zoom_step() -> f32 {
    ZOOM_STEP
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            zoom_step: default_zoom_step(),
        }
    }
}

impl ViewportConfig {
    /// Create a configuration with explicit values.
    pub fn new(min_zoom: f32, max_zoom: f32, zoom_step: f32) -> Self {
        Self {
            min_zoom,
            max_zoom,
            zoom_step,
        }
    }

    /// Check that the bounds form a usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.max_zoom >= self.min_zoom;
        if !range_ok {
            return Err(ConfigError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }

        Ok(())
    }

    /// Clamp a zoom factor into `[min_zoom, max_zoom]`.
    ///
    /// Never panics. On an unvalidated config with inverted bounds the upper
    /// bound wins.
    #[inline]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}

/// Errors raised when a viewport configuration is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Zoom bounds are not finite, not positive, or inverted
    #[error("Invalid zoom range: min {min}, max {max}")]
    InvalidZoomRange { min: f32, max: f32 },

    /// Zoom step is not a positive finite number
    #[error("Invalid zoom step: {0}")]
    InvalidZoomStep(f32),
}
