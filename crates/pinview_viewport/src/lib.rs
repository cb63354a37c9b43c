//! pinview_viewport - zoom and pan engine for an annotated image view
//!
//! This crate owns the viewport state of an image viewer: the zoom factor,
//! the pan offset and the single active pan gesture. Hosts feed it pointer,
//! wheel and button input and receive a [`Transform`] that is applied
//! identically to the image layer and the marker overlay.
//!
//! The crate does not touch any display surface. Geometry is supplied on
//! demand through [`GeometryProvider`], and visual layers receive transforms
//! through [`TransformSink`].

mod clamp;
mod config;
pub mod constants;
mod engine;
mod event;
mod geometry;
mod gesture;
mod state;
mod transform;
mod zoom_math;

pub use clamp::{clamp_pan, max_offset};
pub use config::{ConfigError, ViewportConfig};
pub use engine::{EngineOutput, ViewportEngine};
pub use event::{PointerButton, PointerId, ViewportEvent};
pub use geometry::{FixedGeometry, GeometryProvider, GeometrySnapshot, Point, Size};
pub use gesture::{PanGestureController, PointerCapture};
pub use state::{ActivePan, PanGesture, ViewportState};
pub use transform::{Publication, Transform, TransformPublisher, TransformSink, ZoomDisplay};
pub use zoom_math::{anchor_offset, compute_zoom, ZoomDirection, ZoomOutcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{EngineOutput, ViewportEngine};
    pub use crate::event::{PointerButton, PointerId, ViewportEvent};
    pub use crate::geometry::{FixedGeometry, GeometryProvider, GeometrySnapshot, Point, Size};
    pub use crate::gesture::PointerCapture;
    pub use crate::transform::{Transform, TransformPublisher, TransformSink, ZoomDisplay};
    pub use crate::zoom_math::ZoomDirection;
    pub use crate::ViewportConfig;
}
