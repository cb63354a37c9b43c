//! Data models for the pinview application.

mod annotation;
mod image;

pub use annotation::{Annotation, AnnotationId};
pub use image::{ImageInfo, UNTITLED_IMAGE};
