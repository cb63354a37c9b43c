//! Pan bounds.
//!
//! Content that overflows the container may be panned until its edge meets
//! the container edge. Content that fits is pinned to the centre on that axis.

use crate::geometry::{GeometrySnapshot, Point};

/// Largest legal pan magnitude on each axis.
///
/// Degenerate geometry or a non-finite zoom yields zero on both axes.
pub fn max_offset(zoom: f32, geometry: &GeometrySnapshot) -> Point {
    if geometry.is_degenerate() || !zoom.is_finite() || zoom <= 0.0 {
        return Point::ZERO;
    }

    let axis = |content: f32, container: f32| {
        let overflow = (content * zoom - container) / 2.0;
        if overflow.is_finite() {
            overflow.max(0.0)
        } else {
            0.0
        }
    };

    Point::new(
        axis(geometry.content.width, geometry.container.width),
        axis(geometry.content.height, geometry.container.height),
    )
}

/// Clamp each axis of `pan` into `[-max_offset, +max_offset]`.
///
/// Idempotent. Non-finite components collapse to the centre.
pub fn clamp_pan(pan: Point, zoom: f32, geometry: &GeometrySnapshot) -> Point {
    let max = max_offset(zoom, geometry);

    let axis = |value: f32, limit: f32| {
        if value.is_finite() {
            value.clamp(-limit, limit)
        } else {
            0.0
        }
    };

    Point::new(axis(pan.x, max.x), axis(pan.y, max.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ZOOM_MAX, ZOOM_MIN};
    use crate::geometry::Size;

    fn geometry(container: (f32, f32), content: (f32, f32)) -> GeometrySnapshot {
        GeometrySnapshot::new(
            Size::new(container.0, container.1),
            Size::new(content.0, content.1),
        )
    }

    #[test]
    fn test_max_offset_overflowing_content() {
        let g = geometry((400.0, 300.0), (400.0, 300.0));
        let max = max_offset(2.0, &g);
        assert_eq!(max, Point::new(200.0, 150.0));
    }

    #[test]
    fn test_fitting_content_is_centered() {
        let g = geometry((800.0, 600.0), (400.0, 300.0));
        assert_eq!(max_offset(1.5, &g), Point::ZERO);
        assert_eq!(clamp_pan(Point::new(50.0, -20.0), 1.5, &g), Point::ZERO);
    }

    #[test]
    fn test_axes_clamp_independently() {
        // Wide content overflows horizontally but fits vertically
        let g = geometry((400.0, 400.0), (800.0, 200.0));
        let clamped = clamp_pan(Point::new(500.0, 30.0), 1.0, &g);
        assert_eq!(clamped, Point::new(200.0, 0.0));
    }

    #[test]
    fn test_clamp_within_bounds_across_zoom_range() {
        let g = geometry((500.0, 400.0), (600.0, 450.0));
        let candidates = [
            Point::new(1e6, -1e6),
            Point::new(-37.5, 12.25),
            Point::new(0.0, 0.0),
            Point::new(-400.0, 400.0),
        ];

        let mut zoom = ZOOM_MIN;
        while zoom <= ZOOM_MAX {
            let max = max_offset(zoom, &g);
            for pan in candidates {
                let clamped = clamp_pan(pan, zoom, &g);
                assert!(clamped.x >= -max.x && clamped.x <= max.x);
                assert!(clamped.y >= -max.y && clamped.y <= max.y);
            }
            zoom += 0.05;
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let g = geometry((500.0, 400.0), (600.0, 450.0));
        for zoom in [0.6, 1.0, 1.15, 2.5] {
            for pan in [Point::new(900.0, -3.0), Point::new(-12.0, 700.0)] {
                let once = clamp_pan(pan, zoom, &g);
                let twice = clamp_pan(once, zoom, &g);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_degenerate_geometry_forces_center() {
        let pan = Point::new(42.0, -42.0);
        for g in [
            geometry((0.0, 300.0), (400.0, 300.0)),
            geometry((400.0, 300.0), (0.0, 0.0)),
            geometry((-1.0, -1.0), (400.0, 300.0)),
            geometry((400.0, f32::NAN), (400.0, 300.0)),
        ] {
            let max = max_offset(2.0, &g);
            assert_eq!(max, Point::ZERO);
            assert_eq!(clamp_pan(pan, 2.0, &g), Point::ZERO);
        }
    }

    #[test]
    fn test_non_finite_pan_collapses() {
        let g = geometry((400.0, 300.0), (400.0, 300.0));
        let clamped = clamp_pan(Point::new(f32::NAN, f32::INFINITY), 2.0, &g);
        assert_eq!(clamped, Point::ZERO);
    }
}
