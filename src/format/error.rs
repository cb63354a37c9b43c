//! Error types for data set loading.

use thiserror::Error;

/// Errors that can occur while reading a data set.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: String,
    },

}

impl FormatError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Data quality problems that still leave a data set renderable.
///
/// Loading logs these as warnings instead of rejecting the data set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetIssue {
    /// Annotation at `index` has an empty id
    #[error("Annotation #{index} has an empty id")]
    EmptyId { index: usize },

    /// Two annotations share an id
    #[error("Duplicate annotation id: {id}")]
    DuplicateId { id: String },

    /// Normalized coordinates outside `[0, 1]` or not finite
    #[error("Annotation '{id}' lies off the image at ({x}, {y})")]
    OffImage { id: String, x: f32, y: f32 },

    /// Image reports a zero width or height
    #[error("Image reports degenerate dimensions {width} × {height}")]
    DegenerateImage { width: u32, height: u32 },
}
