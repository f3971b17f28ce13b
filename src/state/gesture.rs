//! Drag/pinch gesture state machine.
//!
//! Operates on canvas-space points and `ImagePosition` values only, so the
//! whole machine tests off-browser. Event handlers convert DOM coordinates
//! first, then feed this module; position updates come back as replacement
//! values for the caller to store.

use crate::model::ImagePosition;

/// Active gesture. Pinch wins whenever two contacts exist.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// `anchor` is `pointer - position` at press time, so moves solve
    /// `position = pointer - anchor` and the grabbed point stays under the
    /// cursor.
    Dragging { anchor_x: f64, anchor_y: f64 },
    /// Two-contact distance and scale snapshotted when the second contact
    /// landed.
    Pinching {
        baseline_dist: f64,
        baseline_scale: f64,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GestureState {
    gesture: Gesture,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Single contact went down at a canvas-space point.
    pub fn press(&mut self, canvas_x: f64, canvas_y: f64, position: ImagePosition) {
        self.gesture = Gesture::Dragging {
            anchor_x: canvas_x - position.x,
            anchor_y: canvas_y - position.y,
        };
    }

    /// Two simultaneous contacts detected; any drag in progress yields.
    pub fn begin_pinch(&mut self, dist: f64, position: ImagePosition) {
        self.gesture = Gesture::Pinching {
            baseline_dist: dist.max(1.0),
            baseline_scale: position.scale,
        };
    }

    /// Contact moved. Returns the replacement position while dragging.
    pub fn move_to(
        &self,
        canvas_x: f64,
        canvas_y: f64,
        position: ImagePosition,
    ) -> Option<ImagePosition> {
        match self.gesture {
            Gesture::Dragging { anchor_x, anchor_y } => {
                Some(position.moved_to(canvas_x - anchor_x, canvas_y - anchor_y))
            }
            _ => None,
        }
    }

    /// Contact distance changed. Returns the replacement position while
    /// pinching; scale is the baseline scaled by the distance ratio, clamped.
    pub fn pinch_to(&self, dist: f64, position: ImagePosition) -> Option<ImagePosition> {
        match self.gesture {
            Gesture::Pinching {
                baseline_dist,
                baseline_scale,
            } => Some(position.with_scale(dist / baseline_dist * baseline_scale)),
            _ => None,
        }
    }

    /// Pointer up, all touches lifted, or pointer left the canvas. Also used
    /// when contacts drop from two to one: release, then `press` at the
    /// surviving contact so the stale pinch baseline is never reused.
    pub fn release(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

/// Distance between two canvas-space contacts, floored so a degenerate pinch
/// cannot produce a zero baseline.
pub fn touch_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt().max(1.0)
}

/// Wheel zoom is a fixed step per event, independent of the gesture machine.
/// Negative `delta_y` (scroll up) zooms in.
pub fn wheel_scale(position: ImagePosition, delta_y: f64) -> ImagePosition {
    let steps = if delta_y < 0.0 { 1.0 } else { -1.0 };
    position.stepped_scale(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn press_then_move_to_same_point_does_not_jump() {
        let position = ImagePosition {
            x: 25.0,
            y: -12.0,
            scale: 1.5,
        };
        let mut gestures = GestureState::default();
        gestures.press(180.0, 140.0, position);
        let moved = gestures.move_to(180.0, 140.0, position).unwrap();
        assert_eq!(moved, position);
    }

    #[test]
    fn drag_translates_by_pointer_delta() {
        let position = ImagePosition::default();
        let mut gestures = GestureState::default();
        gestures.press(100.0, 100.0, position);
        let moved = gestures.move_to(130.0, 80.0, position).unwrap();
        assert_eq!(moved.x, 30.0);
        assert_eq!(moved.y, -20.0);
        assert_eq!(moved.scale, position.scale);
    }

    #[test]
    fn move_is_ignored_while_idle() {
        let gestures = GestureState::default();
        assert!(gestures.move_to(10.0, 10.0, ImagePosition::default()).is_none());
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let position = ImagePosition::default().with_scale(1.0);
        let mut gestures = GestureState::default();
        gestures.begin_pinch(100.0, position);
        let pinched = gestures.pinch_to(200.0, position).unwrap();
        assert_eq!(pinched.scale, 2.0);
        let clamped = gestures.pinch_to(1000.0, position).unwrap();
        assert_eq!(clamped.scale, MAX_SCALE);
        let shrunk = gestures.pinch_to(10.0, position).unwrap();
        assert_eq!(shrunk.scale, MIN_SCALE);
    }

    #[test]
    fn pinch_takes_precedence_over_drag() {
        let position = ImagePosition::default();
        let mut gestures = GestureState::default();
        gestures.press(100.0, 100.0, position);
        gestures.begin_pinch(80.0, position);
        assert!(gestures.move_to(120.0, 120.0, position).is_none());
        assert!(gestures.pinch_to(160.0, position).is_some());
    }

    #[test]
    fn pinch_downgrade_reanchors_without_jump() {
        let mut position = ImagePosition::default().with_scale(1.0);
        let mut gestures = GestureState::default();
        gestures.begin_pinch(100.0, position);
        position = gestures.pinch_to(150.0, position).unwrap();
        // One finger lifted: release, re-press at the survivor.
        gestures.release();
        gestures.press(210.0, 90.0, position);
        let moved = gestures.move_to(210.0, 90.0, position).unwrap();
        assert_eq!(moved, position);
        assert!(gestures.pinch_to(300.0, position).is_none());
    }

    #[test]
    fn release_returns_to_idle() {
        let mut gestures = GestureState::default();
        gestures.press(1.0, 1.0, ImagePosition::default());
        assert!(!gestures.is_idle());
        gestures.release();
        assert!(gestures.is_idle());
    }

    #[test]
    fn touch_distance_floors_degenerate_contacts() {
        assert_eq!(touch_distance((50.0, 50.0), (50.0, 50.0)), 1.0);
        assert_eq!(touch_distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    }

    #[test]
    fn wheel_steps_clamp_at_bounds() {
        let mut position = ImagePosition::default();
        for _ in 0..100 {
            position = wheel_scale(position, -53.0);
        }
        assert_eq!(position.scale, MAX_SCALE);
        for _ in 0..100 {
            position = wheel_scale(position, 53.0);
        }
        assert_eq!(position.scale, MIN_SCALE);
    }
}
