//! Point annotations placed on the image.

use pinview_viewport::Point;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for an annotation.
pub type AnnotationId = String;

/// A titled point on the image.
///
/// Coordinates are normalized: `(0, 0)` is the top-left corner of the image
/// and `(1, 1)` the bottom-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: AnnotationId,
    /// Short label shown in the list and the marker tooltip.
    pub title: String,
    /// Optional longer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional external link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Normalized horizontal position.
    pub x: f32,
    /// Normalized vertical position.
    pub y: f32,
}

impl Annotation {
    /// Create a new annotation at a normalized position.
    pub fn new(id: impl Into<AnnotationId>, title: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            link: None,
            x,
            y,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Normalized position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Description, if present and non-empty.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Link, if present and non-empty.
    pub fn link_url(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Data sets in the wild use both string and numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<AnnotationId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
    })
}
