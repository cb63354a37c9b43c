//! Viewport engine: the single entry point for zoom and pan input.
//!
//! Every mutation follows the same path: the zoom solver or the gesture
//! controller proposes a new state, the pan is clamped against freshly
//! measured geometry, and the resulting [`Transform`] is returned for
//! publishing. Input that changes nothing returns `None`.

use crate::clamp::clamp_pan;
use crate::config::{ConfigError, ViewportConfig};
use crate::event::{PointerButton, PointerId, ViewportEvent};
use crate::geometry::{GeometryProvider, Point};
use crate::gesture::{PanGestureController, PointerCapture};
use crate::state::ViewportState;
use crate::transform::Transform;
use crate::zoom_math::{compute_zoom, ZoomDirection};

/// Result of dispatching a [`ViewportEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineOutput {
    /// New transform to publish, if the view changed
    pub transform: Option<Transform>,
    /// Pointer capture request for the host, if any
    pub capture: Option<PointerCapture>,
}

impl EngineOutput {
    fn transform(transform: Option<Transform>) -> Self {
        Self {
            transform,
            capture: None,
        }
    }

    fn capture(capture: Option<PointerCapture>) -> Self {
        Self {
            transform: None,
            capture,
        }
    }

    /// True when the event had no effect.
    pub fn is_empty(&self) -> bool {
        self.transform.is_none() && self.capture.is_none()
    }
}

/// Owns the viewport state and applies input to it.
pub struct ViewportEngine<G> {
    config: ViewportConfig,
    geometry: G,
    state: ViewportState,
}

impl<G: GeometryProvider> ViewportEngine<G> {
    /// Create an engine with a validated configuration.
    pub fn new(config: ViewportConfig, geometry: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            geometry,
            state: ViewportState::new(),
        })
    }

    /// Create an engine with the default zoom range.
    pub fn with_defaults(geometry: G) -> Self {
        Self {
            config: ViewportConfig::default(),
            geometry,
            state: ViewportState::new(),
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry provider (e.g. to update a fixed
    /// snapshot). Follow up with [`Self::on_resize`] to re-clamp.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Transform for the current state.
    pub fn transform(&self) -> Transform {
        Transform::from_state(&self.state)
    }

    /// Current zoom as a rounded percentage.
    pub fn zoom_percent(&self) -> i32 {
        self.transform().zoom_percent()
    }

    /// True while a pan gesture is in progress.
    pub fn is_panning(&self) -> bool {
        self.state.gesture().is_panning()
    }

    /// Dispatch a host event to the matching entry point.
    pub fn handle(&mut self, event: ViewportEvent) -> EngineOutput {
        match event {
            ViewportEvent::ZoomButton(direction) => {
                EngineOutput::transform(self.on_zoom_button(direction))
            }
            ViewportEvent::Wheel { delta_y, cursor } => {
                EngineOutput::transform(self.on_wheel(delta_y, cursor))
            }
            ViewportEvent::PointerDown {
                pointer_id,
                button,
                position,
            } => EngineOutput::capture(self.on_gesture_start(pointer_id, button, position)),
            ViewportEvent::PointerMove {
                pointer_id,
                position,
            } => EngineOutput::transform(self.on_gesture_move(pointer_id, position)),
            ViewportEvent::PointerUp { pointer_id } => {
                EngineOutput::capture(self.on_gesture_end(pointer_id))
            }
            ViewportEvent::PointerCancel { pointer_id } => {
                EngineOutput::capture(self.on_gesture_cancel(pointer_id))
            }
            ViewportEvent::PointerLeave { pointer_id } => {
                EngineOutput::capture(self.on_gesture_leave(pointer_id))
            }
            ViewportEvent::Resize => EngineOutput::transform(self.on_resize()),
        }
    }

    /// Button-triggered zoom, pivoting on the viewport centre.
    pub fn on_zoom_button(&mut self, direction: ZoomDirection) -> Option<Transform> {
        self.apply_zoom(direction, None)
    }

    /// Wheel zoom anchored at `cursor`, given relative to the viewport centre.
    pub fn on_wheel(&mut self, delta_y: f32, cursor: Point) -> Option<Transform> {
        self.apply_zoom(ZoomDirection::from_wheel_delta(delta_y), Some(cursor))
    }

    /// Zoom one step, optionally keeping `anchor` visually fixed.
    pub fn apply_zoom(
        &mut self,
        direction: ZoomDirection,
        anchor: Option<Point>,
    ) -> Option<Transform> {
        let previous_zoom = self.state.zoom();
        let pan = self.state.pan();
        let outcome = compute_zoom(direction, previous_zoom, pan, &self.config, anchor)?;

        let geometry = self.geometry.snapshot();
        self.state.set_zoom(outcome.zoom);
        self.state.set_pan(clamp_pan(outcome.pan, outcome.zoom, &geometry));

        log::debug!(
            "Zoom {:?}: {:.2}x -> {:.2}x, pan ({:.1}, {:.1})",
            direction,
            previous_zoom,
            outcome.zoom,
            self.state.pan().x,
            self.state.pan().y
        );
        Some(self.transform())
    }

    /// Pointer pressed. Starts a pan gesture for a primary press while idle.
    pub fn on_gesture_start(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    ) -> Option<PointerCapture> {
        let current_pan = self.state.pan();
        let capture = PanGestureController::new(self.state.gesture_mut()).press(
            pointer_id,
            button,
            position,
            current_pan,
        );
        if capture.is_some() {
            log::debug!(
                "Pan started by pointer {} at ({:.1}, {:.1})",
                pointer_id,
                position.x,
                position.y
            );
        }
        capture
    }

    /// Pointer moved. Only the gesture's own pointer pans.
    pub fn on_gesture_move(&mut self, pointer_id: PointerId, position: Point) -> Option<Transform> {
        let candidate =
            PanGestureController::new(self.state.gesture_mut()).drag(pointer_id, position)?;
        let geometry = self.geometry.snapshot();
        let clamped = clamp_pan(candidate, self.state.zoom(), &geometry);
        self.state.set_pan(clamped);
        Some(self.transform())
    }

    /// Pointer released.
    pub fn on_gesture_end(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        let capture = PanGestureController::new(self.state.gesture_mut()).release(pointer_id);
        self.log_pan_end(capture, "released");
        capture
    }

    /// Pointer stream cancelled by the host.
    pub fn on_gesture_cancel(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        let capture = PanGestureController::new(self.state.gesture_mut()).cancel(pointer_id);
        self.log_pan_end(capture, "cancelled");
        capture
    }

    /// Pointer left the interactive surface.
    pub fn on_gesture_leave(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        let capture = PanGestureController::new(self.state.gesture_mut()).leave(pointer_id);
        self.log_pan_end(capture, "left surface");
        capture
    }

    /// Re-clamp after the container or content size changed.
    pub fn on_resize(&mut self) -> Option<Transform> {
        let geometry = self.geometry.snapshot();
        let clamped = clamp_pan(self.state.pan(), self.state.zoom(), &geometry);
        if clamped == self.state.pan() {
            return None;
        }
        self.state.set_pan(clamped);
        Some(self.transform())
    }

    /// Back to zoom 1, centred, no gesture.
    pub fn reset(&mut self) -> Transform {
        self.state.reset();
        log::debug!("View reset");
        self.transform()
    }

    fn log_pan_end(&self, capture: Option<PointerCapture>, reason: &str) {
        if let Some(capture) = capture {
            log::debug!(
                "Pan ended ({}) for pointer {}, pan ({:.1}, {:.1})",
                reason,
                capture.pointer_id(),
                self.state.pan().x,
                self.state.pan().y
            );
        }
    }
}
