//! Pan/zoom transform and its publication to visual layers.
//!
//! The image layer and the marker overlay receive the same [`Transform`] in
//! the same call, so marker positions always agree with the image pixels.

use std::fmt;

use crate::constants::ZOOM_PERCENT_SCALE;
use crate::geometry::Point;
use crate::state::ViewportState;

/// Translate-then-scale affine map: `p' = translate + scale * p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    /// Create a new transform with the given pan and zoom.
    pub fn new(translate_x: f32, translate_y: f32, scale: f32) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    /// Create an identity transform (zoom=1, no pan).
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Transform for the current viewport state.
    pub fn from_state(state: &ViewportState) -> Self {
        let pan = state.pan();
        Self::new(pan.x, pan.y, state.zoom())
    }

    /// Pan component as a point.
    #[inline]
    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Map a content point to screen space.
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        self.translation() + point * self.scale
    }

    /// Map a screen point back to content space.
    ///
    /// Returns `None` for a zero or non-finite scale.
    pub fn invert(&self, point: Point) -> Option<Point> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return None;
        }
        Some((point - self.translation()) * (1.0 / self.scale))
    }

    /// Zoom as a rounded percentage for display.
    pub fn zoom_percent(&self) -> i32 {
        (self.scale * ZOOM_PERCENT_SCALE).round() as i32
    }

    /// CSS `transform` value. Translation is listed first so it is applied in
    /// screen pixels, independent of the scale.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// A visual layer that follows the viewport transform.
pub trait TransformSink {
    fn apply_transform(&mut self, transform: &Transform);
}

/// Receives the zoom percentage for display.
pub trait ZoomDisplay {
    fn show_zoom_percent(&mut self, percent: i32);
}

impl ZoomDisplay for () {
    fn show_zoom_percent(&mut self, _percent: i32) {}
}

/// What a publish call delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Publication {
    pub transform: Transform,
    pub zoom_percent: i32,
}

/// Applies one transform to the content layer and the marker layer together.
pub struct TransformPublisher<C, M, Z = ()> {
    content: C,
    markers: M,
    zoom_display: Z,
    last: Option<Publication>,
}

impl<C: TransformSink, M: TransformSink> TransformPublisher<C, M, ()> {
    pub fn new(content: C, markers: M) -> Self {
        Self::with_zoom_display(content, markers, ())
    }
}

impl<C: TransformSink, M: TransformSink, Z: ZoomDisplay> TransformPublisher<C, M, Z> {
    pub fn with_zoom_display(content: C, markers: M, zoom_display: Z) -> Self {
        Self {
            content,
            markers,
            zoom_display,
            last: None,
        }
    }

    /// Push `transform` to both layers and the zoom display.
    pub fn publish(&mut self, transform: Transform) -> Publication {
        self.content.apply_transform(&transform);
        self.markers.apply_transform(&transform);

        let zoom_percent = transform.zoom_percent();
        self.zoom_display.show_zoom_percent(zoom_percent);

        let publication = Publication {
            transform,
            zoom_percent,
        };
        self.last = Some(publication);
        log::trace!("Published {} ({}%)", transform, zoom_percent);
        publication
    }

    /// Publish the transform derived from `state`.
    pub fn publish_state(&mut self, state: &ViewportState) -> Publication {
        self.publish(Transform::from_state(state))
    }

    /// Most recent publication, if any.
    pub fn last(&self) -> Option<&Publication> {
        self.last.as_ref()
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn zoom_display(&self) -> &Z {
        &self.zoom_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLOAT_EPSILON;

    #[derive(Default)]
    struct Layer {
        css: Option<String>,
        calls: usize,
    }

    impl TransformSink for Layer {
        fn apply_transform(&mut self, transform: &Transform) {
            self.css = Some(transform.to_css());
            self.calls += 1;
        }
    }

    #[derive(Default)]
    struct Label(Option<i32>);

    impl ZoomDisplay for Label {
        fn show_zoom_percent(&mut self, percent: i32) {
            self.0 = Some(percent);
        }
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        assert_eq!(t.apply(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
        assert_eq!(t.zoom_percent(), 100);
        assert_eq!(t, Transform::from_state(&ViewportState::new()));
    }

    #[test]
    fn test_apply_and_invert() {
        let t = Transform::new(-7.5, 10.0, 1.15);
        let p = Point::new(40.0, -20.0);
        let screen = t.apply(p);
        assert_eq!(screen, Point::new(-7.5 + 40.0 * 1.15, 10.0 - 20.0 * 1.15));

        let back = t.invert(screen).unwrap();
        assert!((back.x - p.x).abs() < FLOAT_EPSILON);
        assert!((back.y - p.y).abs() < FLOAT_EPSILON);

        assert_eq!(Transform::new(0.0, 0.0, 0.0).invert(screen), None);
    }

    #[test]
    fn test_css_string() {
        let t = Transform::new(-7.5, 0.0, 1.15);
        assert_eq!(t.to_css(), "translate(-7.5px, 0px) scale(1.15)");
    }

    #[test]
    fn test_zoom_percent_rounds() {
        assert_eq!(Transform::new(0.0, 0.0, 1.15).zoom_percent(), 115);
        assert_eq!(Transform::new(0.0, 0.0, 0.6).zoom_percent(), 60);
        assert_eq!(Transform::new(0.0, 0.0, 2.5).zoom_percent(), 250);
        assert_eq!(Transform::new(0.0, 0.0, 0.7449).zoom_percent(), 74);
    }

    #[test]
    fn test_publish_reaches_both_layers() {
        let mut publisher =
            TransformPublisher::with_zoom_display(Layer::default(), Layer::default(), Label::default());

        let t = Transform::new(12.0, -3.0, 1.3);
        let publication = publisher.publish(t);

        assert_eq!(publication.zoom_percent, 130);
        assert_eq!(publisher.content().css, publisher.markers().css);
        assert_eq!(publisher.content().css.as_deref(), Some("translate(12px, -3px) scale(1.3)"));
        assert_eq!(publisher.content().calls, 1);
        assert_eq!(publisher.markers().calls, 1);
        assert_eq!(publisher.zoom_display().0, Some(130));
        assert_eq!(publisher.last(), Some(&publication));
    }
}
