//! Metadata for the annotated image.

use pinview_viewport::Size;
use serde::{Deserialize, Serialize};

/// Fallback title for images without a name.
pub const UNTITLED_IMAGE: &str = "(untitled)";

/// The image the annotations refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Source URL (absolute or relative to the data set)
    pub url: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type, e.g. `image/jpeg`
    #[serde(default)]
    pub mime: String,
    /// Natural width in pixels
    #[serde(default)]
    pub width: u32,
    /// Natural height in pixels
    #[serde(default)]
    pub height: u32,
    /// Creation timestamp (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ImageInfo {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            name: None,
            mime: String::new(),
            width,
            height,
            created_at: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for headings, falling back to [`UNTITLED_IMAGE`].
    pub fn display_name(&self) -> &str {
        self.display_name_or(UNTITLED_IMAGE)
    }

    /// Name for headings, falling back to `untitled` when unnamed.
    pub fn display_name_or<'a>(&'a self, untitled: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => untitled,
        }
    }

    /// `"W × H"` label.
    pub fn dimension_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }

    /// Natural size as viewport geometry.
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}
