use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::error::{DatasetIssue, FormatError};
use crate::model::{Annotation, ImageInfo};

/// One image and its point annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub image: ImageInfo,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Dataset {
    pub fn new(image: ImageInfo) -> Self {
        Self {
            image,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Parse and validate a data set from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse and validate a data set from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, FormatError> {
        let dataset: Self = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a data set from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, FormatError> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        log::info!(
            "Loaded data set {:?}: '{}' with {} annotations",
            path,
            dataset.image.display_name(),
            dataset.annotations.len()
        );
        Ok(dataset)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject data sets that cannot be rendered and warn about the rest.
    ///
    /// Only a missing image URL is an error. Duplicate or empty ids,
    /// off-image coordinates and zero image dimensions are logged and the
    /// data set is shown as given.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.image.url.trim().is_empty() {
            return Err(FormatError::missing_field("image.url"));
        }
        for issue in self.issues() {
            log::warn!("{}", issue);
        }
        Ok(())
    }

    /// Data quality problems, in data set order.
    pub fn issues(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();
        if self.image.width == 0 || self.image.height == 0 {
            issues.push(DatasetIssue::DegenerateImage {
                width: self.image.width,
                height: self.image.height,
            });
        }

        let normalized = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
        let mut seen = HashSet::with_capacity(self.annotations.len());
        for (index, annotation) in self.annotations.iter().enumerate() {
            if annotation.id.is_empty() {
                issues.push(DatasetIssue::EmptyId { index });
            } else if !seen.insert(annotation.id.as_str()) {
                issues.push(DatasetIssue::DuplicateId {
                    id: annotation.id.clone(),
                });
            }
            if !normalized(annotation.x) || !normalized(annotation.y) {
                issues.push(DatasetIssue::OffImage {
                    id: annotation.id.clone(),
                    x: annotation.x,
                    y: annotation.y,
                });
            }
        }
        issues
    }

    /// Look up an annotation by id.
    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
