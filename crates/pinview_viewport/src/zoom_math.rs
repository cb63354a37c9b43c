//! Zoom-to-cursor mathematics.
//!
//! Zoom steps are additive and clamped to the configured range. When an
//! anchor is given, the pan is solved so the content point under the anchor
//! stays under it after rescaling.

use crate::config::ViewportConfig;
use crate::geometry::{Point, Size};

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a wheel delta to a direction.
    ///
    /// Scrolling up (negative `delta_y`) zooms in. Anything else, including
    /// a zero or NaN delta, zooms out.
    pub fn from_wheel_delta(delta_y: f32) -> Self {
        if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        }
    }

    /// Signed zoom change for one step.
    #[inline]
    pub fn delta(self, step: f32) -> f32 {
        match self {
            ZoomDirection::In => step,
            ZoomDirection::Out => -step,
        }
    }

    /// Parse the `data-zoom` attribute values used by zoom buttons.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "in" => Some(ZoomDirection::In),
            "out" => Some(ZoomDirection::Out),
            _ => None,
        }
    }
}

/// Result of a zoom step, before bounds clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOutcome {
    pub zoom: f32,
    pub pan: Point,
}

/// Compute the zoom and pan after one step in `direction`.
///
/// Returns `None` when the step would not change the zoom (already at a
/// bound). `anchor` is the cursor position relative to the viewport centre;
/// without one the pan is left untouched and zoom pivots on the centre.
///
/// With an anchor `a`, the new pan satisfies
/// `(a - pan') / zoom' == (a - pan) / zoom`, i.e. the content point under the
/// anchor is the same before and after. Solving gives
/// `pan' = a * (1 - ratio) + ratio * pan` with `ratio = zoom' / zoom`.
pub fn compute_zoom(
    direction: ZoomDirection,
    current_zoom: f32,
    pan: Point,
    config: &ViewportConfig,
    anchor: Option<Point>,
) -> Option<ZoomOutcome> {
    let new_zoom = config.clamp_zoom(current_zoom + direction.delta(config.zoom_step));
    if new_zoom == current_zoom {
        return None;
    }

    let pan = match anchor {
        Some(anchor) if current_zoom > 0.0 && anchor.is_finite() => {
            let ratio = new_zoom / current_zoom;
            anchor * (1.0 - ratio) + pan * ratio
        }
        _ => pan,
    };

    Some(ZoomOutcome {
        zoom: new_zoom,
        pan,
    })
}

/// Convert a client-space cursor position into an offset from the centre of
/// the container whose top-left corner sits at `container_origin`.
pub fn anchor_offset(cursor: Point, container_origin: Point, container_size: Size) -> Point {
    cursor - container_origin - container_size.center()
}
