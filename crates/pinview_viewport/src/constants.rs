//! Centralized constants for pinview_viewport
//!
//! Defaults for the viewport configuration live here so that hosts and tests
//! agree on the same numbers.

// =============================================================================
// Zoom
// =============================================================================

/// Minimum zoom level (60%)
pub const ZOOM_MIN: f32 = 0.6;

/// Maximum zoom level (250%)
pub const ZOOM_MAX: f32 = 2.5;

/// Additive zoom increment per button press or wheel notch
pub const ZOOM_STEP: f32 = 0.15;

/// Zoom level the viewport starts at and resets to
pub const ZOOM_DEFAULT: f32 = 1.0;

/// Multiplier from zoom factor to the displayed percentage
pub const ZOOM_PERCENT_SCALE: f32 = 100.0;

// =============================================================================
// Tolerances & Math
// =============================================================================

/// Epsilon for float comparison
pub const FLOAT_EPSILON: f32 = 0.0001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_constants_are_ordered() {
        assert!(ZOOM_MIN > 0.0);
        assert!(ZOOM_MAX > ZOOM_MIN);
        assert!(ZOOM_DEFAULT >= ZOOM_MIN && ZOOM_DEFAULT <= ZOOM_MAX);
        assert!(ZOOM_STEP > 0.0);
    }
}
