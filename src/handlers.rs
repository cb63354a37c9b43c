//! Message handlers for the pinview application.
//!
//! Each handler processes a specific category of messages,
//! keeping the main Viewer update function clean and organized.

use pinview_viewport::{EngineOutput, GeometryProvider, PointerCapture, ViewportEngine};

use crate::message::{AnnotationMessage, ViewMessage};
use crate::selection::{Selection, SelectionChange};

/// Handle viewport messages (zoom, pan, resize).
pub fn handle_view<G: GeometryProvider>(
    msg: ViewMessage,
    engine: &mut ViewportEngine<G>,
) -> EngineOutput {
    match msg.to_event() {
        Some(event) => engine.handle(event),
        None => {
            // Reset also ends any gesture, so hand its pointer back
            let captured = engine.state().gesture().pointer_id();
            EngineOutput {
                transform: Some(engine.reset()),
                capture: captured.map(PointerCapture::Release),
            }
        }
    }
}

/// Handle annotation highlight messages.
pub fn handle_annotation(msg: AnnotationMessage, selection: &mut Selection) -> Option<SelectionChange> {
    match msg {
        AnnotationMessage::Hovered(id) | AnnotationMessage::Focused(id) => {
            selection.set_active(Some(&id))
        }
        AnnotationMessage::Left | AnnotationMessage::Blurred => selection.clear(),
    }
}
