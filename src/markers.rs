//! Marker placement on the annotated image.
//!
//! Markers live in a layer that shares the image's transform. Within that
//! layer a marker sits at its normalized position scaled by the rendered
//! image size; the viewport transform then maps it to the screen, so a
//! marker's screen position is always `pan + zoom * content_position`.
//!
//! Content positions are measured from the image centre, the same origin
//! the viewport uses for pan and zoom anchors.

use pinview_viewport::{Point, Size, Transform};

use crate::model::{Annotation, AnnotationId};

/// A placed marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: AnnotationId,
    pub title: String,
    /// Normalized position on the image
    pub normalized: Point,
    /// Position in content pixels relative to the image centre, at zoom 1
    pub content_position: Point,
}

impl Marker {
    /// CSS `left` percentage inside the marker layer.
    pub fn left_percent(&self) -> f32 {
        self.normalized.x * 100.0
    }

    /// CSS `top` percentage inside the marker layer.
    pub fn top_percent(&self) -> f32 {
        self.normalized.y * 100.0
    }

    /// Screen position (relative to the viewport centre) under `transform`.
    #[inline]
    pub fn screen_position(&self, transform: &Transform) -> Point {
        transform.apply(self.content_position)
    }
}

/// Markers for every annotation of a data set.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayout {
    markers: Vec<Marker>,
    base: Size,
}

impl MarkerLayout {
    /// Place `annotations` on an image rendered at `base` size (zoom 1).
    pub fn new(annotations: &[Annotation], base: Size) -> Self {
        let markers = annotations
            .iter()
            .map(|annotation| {
                let normalized = annotation.position();
                Marker {
                    id: annotation.id.clone(),
                    title: annotation.title.clone(),
                    normalized,
                    content_position: content_position(normalized, base),
                }
            })
            .collect();

        Self { markers, base }
    }

    /// Recompute content positions after the rendered image size changed.
    pub fn relayout(&mut self, base: Size) {
        self.base = base;
        for marker in &mut self.markers {
            marker.content_position = content_position(marker.normalized, base);
        }
    }

    pub fn base(&self) -> Size {
        self.base
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Screen positions of all markers under `transform`.
    pub fn screen_positions<'a>(
        &'a self,
        transform: &'a Transform,
    ) -> impl Iterator<Item = (&'a Marker, Point)> + 'a {
        self.markers
            .iter()
            .map(move |marker| (marker, marker.screen_position(transform)))
    }

    /// Nearest marker within `radius` screen pixels of `screen_point`.
    ///
    /// The result borrows only the layout, so `transform` may be a temporary.
    pub fn hit_test(&self, transform: &Transform, screen_point: Point, radius: f32) -> Option<&Marker> {
        let radius_sq = radius * radius;
        self.markers
            .iter()
            .filter_map(|marker| {
                let d = marker.screen_position(transform) - screen_point;
                let dist_sq = d.x * d.x + d.y * d.y;
                (dist_sq <= radius_sq).then_some((marker, dist_sq))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(marker, _)| marker)
    }
}

fn content_position(normalized: Point, base: Size) -> Point {
    Point::new(
        (normalized.x - 0.5) * base.width,
        (normalized.y - 0.5) * base.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MarkerLayout {
        let annotations = vec![
            Annotation::new("centre", "Centre", 0.5, 0.5),
            Annotation::new("corner", "Corner", 0.0, 0.0),
            Annotation::new("right", "Right", 0.75, 0.5),
        ];
        MarkerLayout::new(&annotations, Size::new(400.0, 200.0))
    }

    #[test]
    fn test_content_positions() {
        let layout = layout();
        assert_eq!(layout.get("centre").unwrap().content_position, Point::ZERO);
        assert_eq!(
            layout.get("corner").unwrap().content_position,
            Point::new(-200.0, -100.0)
        );
        assert_eq!(layout.get("right").unwrap().content_position, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_css_percentages() {
        let layout = layout();
        let right = layout.get("right").unwrap();
        assert_eq!(right.left_percent(), 75.0);
        assert_eq!(right.top_percent(), 50.0);
    }

    #[test]
    fn test_screen_position_follows_transform() {
        let layout = layout();
        let transform = Transform::new(-7.5, 4.0, 1.5);
        let right = layout.get("right").unwrap();
        assert_eq!(right.screen_position(&transform), Point::new(-7.5 + 150.0, 4.0));

        for (marker, position) in layout.screen_positions(&transform) {
            let expected = transform.translation() + marker.content_position * transform.scale;
            assert_eq!(position, expected);
        }
    }

    #[test]
    fn test_relayout() {
        let mut layout = layout();
        layout.relayout(Size::new(800.0, 400.0));
        assert_eq!(layout.get("right").unwrap().content_position, Point::new(200.0, 0.0));
        assert_eq!(layout.base(), Size::new(800.0, 400.0));
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let layout = layout();
        let transform = Transform::identity();

        let hit = layout.hit_test(&transform, Point::new(96.0, 2.0), 10.0);
        assert_eq!(hit.map(|m| m.id.as_str()), Some("right"));

        let hit = layout.hit_test(&transform, Point::new(3.0, 0.0), 200.0);
        assert_eq!(hit.map(|m| m.id.as_str()), Some("centre"));

        assert!(layout.hit_test(&transform, Point::new(50.0, 50.0), 10.0).is_none());
    }

    #[test]
    fn test_hit_test_result_outlives_transform() {
        let layout = layout();
        let hit = layout.hit_test(&Transform::new(10.0, 0.0, 2.0), Point::new(210.0, 0.0), 5.0);
        assert_eq!(hit.map(|m| m.title.as_str()), Some("Right"));
    }

    #[test]
    fn test_duplicate_ids_each_get_a_marker() {
        let annotations = vec![
            Annotation::new("x", "One", 0.25, 0.5),
            Annotation::new("x", "Two", 0.75, 0.5),
        ];
        let layout = MarkerLayout::new(&annotations, Size::new(400.0, 200.0));

        assert_eq!(layout.markers().len(), 2);
        let hit = layout.hit_test(&Transform::identity(), Point::new(100.0, 0.0), 5.0);
        assert_eq!(hit.map(|m| m.title.as_str()), Some("Two"));
    }
}
