//! Press-drag-release pan gestures.
//!
//! One pointer at a time. A press while a gesture is active is ignored, and
//! move/release/cancel events from any other pointer are ignored as stale.

use crate::event::{PointerButton, PointerId};
use crate::geometry::Point;
use crate::state::{ActivePan, PanGesture};

/// Pointer capture requests for the host.
///
/// While a gesture is active the host must route every event of the captured
/// pointer to the engine, even when it leaves the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCapture {
    Acquire(PointerId),
    Release(PointerId),
}

impl PointerCapture {
    pub fn pointer_id(self) -> PointerId {
        match self {
            PointerCapture::Acquire(id) | PointerCapture::Release(id) => id,
        }
    }
}

/// Drives a [`PanGesture`] through Idle → Panning → Idle.
pub struct PanGestureController<'a> {
    gesture: &'a mut PanGesture,
}

impl<'a> PanGestureController<'a> {
    pub fn new(gesture: &'a mut PanGesture) -> Self {
        Self { gesture }
    }

    /// Begin a gesture on a primary-button press.
    ///
    /// `current_pan` is copied, so later pan changes do not leak into the
    /// gesture's origin.
    pub fn press(
        &mut self,
        pointer_id: PointerId,
        button: PointerButton,
        position: Point,
        current_pan: Point,
    ) -> Option<PointerCapture> {
        if button != PointerButton::Primary {
            return None;
        }
        if let PanGesture::Panning(active) = *self.gesture {
            log::trace!(
                "Ignoring press from pointer {} while pointer {} is panning",
                pointer_id,
                active.pointer_id
            );
            return None;
        }

        *self.gesture = PanGesture::Panning(ActivePan {
            pointer_id,
            start_pointer: position,
            start_pan: current_pan,
        });
        Some(PointerCapture::Acquire(pointer_id))
    }

    /// Candidate pan for a move of the gesture's pointer.
    ///
    /// The result is unclamped; the caller clamps before publishing.
    #[inline]
    pub fn drag(&self, pointer_id: PointerId, position: Point) -> Option<Point> {
        match *self.gesture {
            PanGesture::Panning(active) if active.pointer_id == pointer_id => {
                Some(active.pan_at(position))
            }
            _ => None,
        }
    }

    /// End the gesture on release.
    pub fn release(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        self.finish(pointer_id)
    }

    /// End the gesture when the host cancels the pointer stream.
    pub fn cancel(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        self.finish(pointer_id)
    }

    /// End the gesture when the pointer leaves the surface.
    pub fn leave(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        self.finish(pointer_id)
    }

    fn finish(&mut self, pointer_id: PointerId) -> Option<PointerCapture> {
        match *self.gesture {
            PanGesture::Panning(active) if active.pointer_id == pointer_id => {
                *self.gesture = PanGesture::Idle;
                Some(PointerCapture::Release(pointer_id))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_starts_gesture() {
        let mut gesture = PanGesture::Idle;
        let mut controller = PanGestureController::new(&mut gesture);
        let capture = controller.press(
            1,
            PointerButton::Primary,
            Point::new(10.0, 20.0),
            Point::new(5.0, 5.0),
        );
        assert_eq!(capture, Some(PointerCapture::Acquire(1)));
        assert_eq!(
            gesture,
            PanGesture::Panning(ActivePan {
                pointer_id: 1,
                start_pointer: Point::new(10.0, 20.0),
                start_pan: Point::new(5.0, 5.0),
            })
        );
    }

    #[test]
    fn test_non_primary_press_ignored() {
        let mut gesture = PanGesture::Idle;
        let mut controller = PanGestureController::new(&mut gesture);
        assert_eq!(
            controller.press(1, PointerButton::Secondary, Point::ZERO, Point::ZERO),
            None
        );
        assert_eq!(
            controller.press(1, PointerButton::Auxiliary, Point::ZERO, Point::ZERO),
            None
        );
        assert!(!gesture.is_panning());
    }

    #[test]
    fn test_second_pointer_cannot_take_over() {
        let mut gesture = PanGesture::Idle;
        let mut controller = PanGestureController::new(&mut gesture);
        controller.press(1, PointerButton::Primary, Point::ZERO, Point::ZERO);
        let capture = controller.press(2, PointerButton::Primary, Point::new(50.0, 50.0), Point::ZERO);
        assert_eq!(capture, None);
        assert_eq!(gesture.pointer_id(), Some(1));
    }

    #[test]
    fn test_drag_only_for_active_pointer() {
        let mut gesture = PanGesture::Idle;
        let mut controller = PanGestureController::new(&mut gesture);
        controller.press(7, PointerButton::Primary, Point::new(100.0, 100.0), Point::new(10.0, 10.0));

        assert_eq!(controller.drag(8, Point::new(200.0, 200.0)), None);
        assert_eq!(
            controller.drag(7, Point::new(105.0, 90.0)),
            Some(Point::new(15.0, 0.0))
        );
    }

    #[test]
    fn test_drag_while_idle_is_ignored() {
        let mut gesture = PanGesture::Idle;
        let controller = PanGestureController::new(&mut gesture);
        assert_eq!(controller.drag(1, Point::new(3.0, 3.0)), None);
    }

    #[derive(Clone, Copy)]
    enum Ending {
        Release,
        Cancel,
        Leave,
    }

    fn end(controller: &mut PanGestureController<'_>, ending: Ending, id: PointerId) -> Option<PointerCapture> {
        match ending {
            Ending::Release => controller.release(id),
            Ending::Cancel => controller.cancel(id),
            Ending::Leave => controller.leave(id),
        }
    }

    #[test]
    fn test_release_cancel_leave_end_gesture() {
        for ending in [Ending::Release, Ending::Cancel, Ending::Leave] {
            let mut gesture = PanGesture::Idle;
            let mut controller = PanGestureController::new(&mut gesture);
            controller.press(3, PointerButton::Primary, Point::ZERO, Point::ZERO);

            // Stale pointer ids are ignored
            assert_eq!(end(&mut controller, ending, 4), None);
            assert_eq!(end(&mut controller, ending, 3), Some(PointerCapture::Release(3)));
            // A duplicate end arrives while idle
            assert_eq!(end(&mut controller, ending, 3), None);
            assert!(!gesture.is_panning());
        }
    }

    #[test]
    fn test_new_gesture_after_release() {
        let mut gesture = PanGesture::Idle;
        let mut controller = PanGestureController::new(&mut gesture);
        controller.press(1, PointerButton::Primary, Point::ZERO, Point::ZERO);
        controller.release(1);
        assert_eq!(
            controller.press(2, PointerButton::Primary, Point::ZERO, Point::ZERO),
            Some(PointerCapture::Acquire(2))
        );
        assert_eq!(gesture.pointer_id(), Some(2));
    }
}
