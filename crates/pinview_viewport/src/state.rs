//! Viewport state: zoom, pan and the active pan gesture.

use crate::constants::ZOOM_DEFAULT;
use crate::event::PointerId;
use crate::geometry::Point;

/// Bookkeeping for a pan gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePan {
    /// Pointer that owns the gesture
    pub pointer_id: PointerId,
    /// Pointer position at press time (client space)
    pub start_pointer: Point,
    /// Pan offset at press time
    pub start_pan: Point,
}

impl ActivePan {
    /// Pan offset for the pointer at `position`.
    ///
    /// Always recomputed from the press snapshot rather than accumulated, so
    /// missed or coalesced move events cannot introduce drift.
    #[inline]
    pub fn pan_at(&self, position: Point) -> Point {
        self.start_pan + (position - self.start_pointer)
    }
}

/// Pan drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanGesture {
    /// No gesture in progress
    #[default]
    Idle,
    /// A single pointer is dragging the content
    Panning(ActivePan),
}

impl PanGesture {
    /// Check if currently panning
    pub fn is_panning(&self) -> bool {
        matches!(self, PanGesture::Panning(_))
    }

    /// The active gesture, if any
    pub fn active(&self) -> Option<&ActivePan> {
        match self {
            PanGesture::Panning(active) => Some(active),
            PanGesture::Idle => None,
        }
    }

    /// Pointer owning the active gesture
    pub fn pointer_id(&self) -> Option<PointerId> {
        self.active().map(|active| active.pointer_id)
    }
}

/// Zoom and pan owned by the viewport engine.
///
/// Readable by anyone, writable only from inside this crate. Hosts mutate it
/// through [`crate::ViewportEngine`] entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f32,
    pan: Point,
    gesture: PanGesture,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: ZOOM_DEFAULT,
            pan: Point::ZERO,
            gesture: PanGesture::Idle,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor (1.0 = 100%)
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current pan offset in screen pixels
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Current gesture state
    pub fn gesture(&self) -> &PanGesture {
        &self.gesture
    }

    pub(crate) fn gesture_mut(&mut self) -> &mut PanGesture {
        &mut self.gesture
    }

    pub(crate) fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    pub(crate) fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
