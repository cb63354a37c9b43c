//! pinview - annotated image viewer
//!
//! Shows an image with annotation markers and an annotation list. The image
//! and its markers can be zoomed and panned together; the interaction logic
//! lives in the `pinview_viewport` crate.

pub mod app;
pub mod config;
pub mod constants;
pub mod format;
pub mod handlers;
pub mod markers;
pub mod message;
pub mod model;
pub mod selection;

pub use app::{UpdateResult, Viewer};
pub use config::{AppConfig, Labels, LogLevel};
pub use format::{Dataset, FormatError};
pub use message::{AnnotationMessage, Message, ViewMessage};
pub use selection::{Selection, SelectionChange};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
