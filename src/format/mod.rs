//! Annotation data set loading.
//!
//! A data set is a single JSON document describing one image and the point
//! annotations placed on it:
//!
//! ```json
//! {
//!   "image": { "url": "img/harbour.jpg", "name": "Harbour", "mime": "image/jpeg",
//!              "width": 1920, "height": 1080, "created_at": "2024-05-01T09:30:00Z" },
//!   "annotations": [
//!     { "id": "a1", "title": "Lighthouse", "description": "Built 1887", "x": 0.8, "y": 0.2 }
//!   ]
//! }
//! ```

mod dataset;
mod error;
mod timestamp;

#[cfg(test)]
mod tests;

pub use dataset::Dataset;
pub use error::{DatasetIssue, FormatError};
pub use timestamp::format_timestamp;
