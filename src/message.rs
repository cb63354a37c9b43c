//! Application message types for pinview.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use pinview_viewport::{Point, PointerButton, PointerId, ViewportEvent, ZoomDirection};

use crate::model::AnnotationId;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Zoom/pan input for the image viewport
    View(ViewMessage),
    /// Hover/focus input from markers and list entries
    Annotation(AnnotationMessage),
}

/// Viewport input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMessage {
    /// Zoom-in button clicked
    ZoomIn,
    /// Zoom-out button clicked
    ZoomOut,
    /// Back to 100%, centred
    ResetView,
    /// Wheel scrolled with the cursor at `cursor` (relative to viewport centre)
    Wheel { delta_y: f32, cursor: Point },
    /// Pointer pressed on the image area
    PointerDown {
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved
    PointerMove { pointer_id: PointerId, position: Point },
    /// Pointer released
    PointerUp { pointer_id: PointerId },
    /// Pointer cancelled by the host
    PointerCancel { pointer_id: PointerId },
    /// Pointer left the image area
    PointerLeave { pointer_id: PointerId },
    /// Container or image size changed
    Resized,
}

impl ViewMessage {
    /// Engine event for this message. `ResetView` has none; it is handled
    /// directly.
    pub fn to_event(self) -> Option<ViewportEvent> {
        Some(match self {
            ViewMessage::ZoomIn => ViewportEvent::ZoomButton(ZoomDirection::In),
            ViewMessage::ZoomOut => ViewportEvent::ZoomButton(ZoomDirection::Out),
            ViewMessage::ResetView => return None,
            ViewMessage::Wheel { delta_y, cursor } => ViewportEvent::Wheel { delta_y, cursor },
            ViewMessage::PointerDown {
                pointer_id,
                button,
                position,
            } => ViewportEvent::PointerDown {
                pointer_id,
                button,
                position,
            },
            ViewMessage::PointerMove {
                pointer_id,
                position,
            } => ViewportEvent::PointerMove {
                pointer_id,
                position,
            },
            ViewMessage::PointerUp { pointer_id } => ViewportEvent::PointerUp { pointer_id },
            ViewMessage::PointerCancel { pointer_id } => ViewportEvent::PointerCancel { pointer_id },
            ViewMessage::PointerLeave { pointer_id } => ViewportEvent::PointerLeave { pointer_id },
            ViewMessage::Resized => ViewportEvent::Resize,
        })
    }
}

/// Annotation highlight input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationMessage {
    /// Mouse entered a marker or list entry
    Hovered(AnnotationId),
    /// A marker or list entry received keyboard focus
    Focused(AnnotationId),
    /// Mouse left a marker or list entry
    Left,
    /// A marker or list entry lost focus
    Blurred,
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Message::View(msg)
    }
}

impl From<AnnotationMessage> for Message {
    fn from(msg: AnnotationMessage) -> Self {
        Message::Annotation(msg)
    }
}
