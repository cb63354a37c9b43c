use crate::geometry::Point;
use crate::zoom_math::ZoomDirection;

/// Host-assigned identifier of a pointer (mouse, pen or touch contact).
pub type PointerId = i32;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom_button(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other.max(0) as u16),
        }
    }
}

/// Input the viewport engine responds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// A zoom button was clicked.
    ZoomButton(ZoomDirection),
    /// Wheel scrolled; `cursor` is relative to the viewport centre.
    Wheel { delta_y: f32, cursor: Point },
    /// Pointer pressed inside the interactive surface.
    PointerDown {
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved.
    PointerMove { pointer_id: PointerId, position: Point },
    /// Pointer released.
    PointerUp { pointer_id: PointerId },
    /// Pointer stream cancelled by the host.
    PointerCancel { pointer_id: PointerId },
    /// Pointer left the interactive surface.
    PointerLeave { pointer_id: PointerId },
    /// Container or content size changed.
    Resize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_button_mapping() {
        assert_eq!(PointerButton::from_dom_button(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom_button(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom_button(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom_button(4), PointerButton::Other(4));
        assert_eq!(PointerButton::from_dom_button(-1), PointerButton::Other(0));
    }
}
