//! Drag gesture state machine
//!
//! `Idle -> Dragging -> Idle`, once per gesture. Pointer coordinates are
//! relative to the circle center with y pointing down.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::angle::angle_to_value;
use crate::consts::CENTER_EPSILON;
use crate::{cartesian_to_polar, finite_or_zero};

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    /// No gesture in progress
    #[default]
    Idle,
    /// Handle grabbed, receiving moves
    Dragging,
}

/// Angle/value produced by a drag step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub angle: f64,
    pub value: i64,
}

/// Drag controller for a single handle
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    /// Angle of the most recent accepted pointer position this gesture
    last_angle: Option<f64>,
    max: i64,
}

impl DragController {
    pub fn new(max: i64) -> Self {
        Self {
            phase: DragPhase::Idle,
            last_angle: None,
            max,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn last_angle(&self) -> Option<f64> {
        self.last_angle
    }

    /// Begin a gesture. Returns false if one is already running.
    ///
    /// The host must stop the start event from reaching ancestor handlers
    /// whenever this returns true.
    pub fn on_drag_start(&mut self) -> bool {
        if self.phase == DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.last_angle = None;
        true
    }

    /// Interim move. Ignored when idle or when the pointer sits on the center.
    pub fn on_drag(&mut self, pointer: DVec2) -> Option<DragUpdate> {
        if self.phase != DragPhase::Dragging {
            return None;
        }

        let (x, y) = (finite_or_zero(pointer.x), finite_or_zero(pointer.y));
        let distance = (x * x + y * y).sqrt();
        if distance < CENTER_EPSILON {
            log::trace!("Ignoring drag at circle center ({x}, {y})");
            return None;
        }

        let alpha = (x / distance).clamp(-1.0, 1.0).acos();
        let angle = if y < 0.0 { -alpha } else { alpha };

        self.last_angle = Some(angle);
        Some(DragUpdate {
            angle,
            value: angle_to_value(angle, self.max),
        })
    }

    /// Finish the gesture and produce the committed value
    ///
    /// Returns `None` if no gesture was running.
    pub fn on_drag_end(&mut self, pointer: DVec2) -> Option<DragUpdate> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.phase = DragPhase::Idle;

        let pointer = DVec2::new(finite_or_zero(pointer.x), finite_or_zero(pointer.y));
        let (_, angle) = cartesian_to_polar(pointer);
        self.last_angle = Some(angle);
        // angle_to_value is already integral, so flooring the commit is a no-op
        Some(DragUpdate {
            angle,
            value: angle_to_value(angle, self.max),
        })
    }

    /// Gesture aborted by the platform, no release position available.
    /// Returns true if a gesture was running.
    pub fn on_drag_cancel(&mut self) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const R: f64 = 45.0;

    #[test]
    fn test_lifecycle() {
        let mut drag = DragController::new(100);
        assert_eq!(drag.phase(), DragPhase::Idle);

        assert!(drag.on_drag_start());
        assert!(drag.is_dragging());

        let step = drag.on_drag(DVec2::new(-R, 0.0)).unwrap();
        assert_eq!(step.value, 25);
        assert_eq!(drag.last_angle(), Some(step.angle));

        let commit = drag.on_drag_end(DVec2::new(0.0, -R)).unwrap();
        assert_eq!(commit.value, 50);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_start_while_dragging_rejected() {
        let mut drag = DragController::new(100);
        assert!(drag.on_drag_start());
        assert!(!drag.on_drag_start());
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_idle_ignores_moves_and_ends() {
        let mut drag = DragController::new(100);
        assert!(drag.on_drag(DVec2::new(R, 0.0)).is_none());
        assert!(drag.on_drag_end(DVec2::new(R, 0.0)).is_none());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_center_move_ignored() {
        let mut drag = DragController::new(100);
        drag.on_drag_start();
        drag.on_drag(DVec2::new(0.0, R));
        let before = drag.last_angle();

        assert!(drag.on_drag(DVec2::ZERO).is_none());
        assert!(drag.on_drag(DVec2::new(f64::NAN, 0.0)).is_none());
        assert_eq!(drag.last_angle(), before);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_upper_half_angle_is_negative() {
        let mut drag = DragController::new(100);
        drag.on_drag_start();
        let step = drag.on_drag(DVec2::new(0.0, -R)).unwrap();
        assert!((step.angle + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_restartable_after_end() {
        let mut drag = DragController::new(100);
        drag.on_drag_start();
        drag.on_drag_end(DVec2::new(R, 0.0));
        assert!(drag.on_drag_start());
        assert_eq!(drag.last_angle(), None);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut drag = DragController::new(100);
        assert!(!drag.on_drag_cancel());

        drag.on_drag_start();
        let step = drag.on_drag(DVec2::new(-R, 0.0)).unwrap();
        assert!(drag.on_drag_cancel());
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.last_angle(), Some(step.angle));
        assert!(drag.on_drag_start());
    }

    proptest! {
        #[test]
        fn start_then_end_commits_pointer_value(x in -200.0f64..200.0, y in -200.0f64..200.0) {
            let mut drag = DragController::new(100);
            drag.on_drag_start();
            let commit = drag.on_drag_end(DVec2::new(x, y)).unwrap();
            prop_assert_eq!(commit.value, angle_to_value(y.atan2(x), 100));
        }

        #[test]
        fn move_agrees_with_atan2(x in -200.0f64..200.0, y in -200.0f64..200.0) {
            prop_assume!(x.hypot(y) > 1.0);
            let mut drag = DragController::new(100);
            drag.on_drag_start();
            let step = drag.on_drag(DVec2::new(x, y)).unwrap();
            let reference = y.atan2(x);
            prop_assert!((step.angle.cos() - reference.cos()).abs() < 1e-6);
            prop_assert!((step.angle.sin() - reference.sin()).abs() < 1e-6);
        }
    }
}
