//! Progress arc sweep
//!
//! The arc primitive always sweeps from `start_angle` to `end_angle` in
//! increasing order, using the arc-generator convention (0 at 12 o'clock,
//! clockwise). Handle angles use the screen convention (0 at 3 o'clock), so
//! converting adds π/2. Once the handle wraps past ±π a full turn is added,
//! otherwise the arc would unwind the long way round.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::consts::{SWEEP_START_ANGLE, ZERO_SWEEP_EPSILON};

/// Annular sector handed to the arc primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSweep {
    /// Start angle (arc-generator radians)
    pub start_angle: f64,
    /// End angle (arc-generator radians, >= start_angle)
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcSweep {
    /// Sweep for the current handle angle and value
    pub fn new(config: &SliderConfig, angle: f64, value: i64) -> Self {
        Self {
            start_angle: SWEEP_START_ANGLE,
            end_angle: sweep_end_angle(angle, value),
            inner_radius: config.track_radius(),
            outer_radius: config.outer_radius(),
        }
    }

    /// Angular span covered by the arc
    #[inline]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// End angle of the progress arc for a handle at `angle` holding `value`
pub fn sweep_end_angle(angle: f64, value: i64) -> f64 {
    if value == 0 {
        return angle + FRAC_PI_2 + ZERO_SWEEP_EPSILON;
    }

    let (y, x) = angle.sin_cos();
    if x <= 0.0 && y >= 0.0 {
        angle + FRAC_PI_2
    } else {
        TAU + angle + FRAC_PI_2
    }
}
