//! Round Slider - a circular "donut" value selector
//!
//! Core modules:
//! - `slider`: Angle/value math, arc sweep, drag state machine, slider model
//! - `renderer`: Rendering collaborator interface and SVG arc paths
//! - `config`: Per-widget configuration (size, radius, range, units)
//! - `web`: Browser host wiring the model to DOM/SVG (wasm32 only)
//!
//! Angles are in radians, zero pointing right (3 o'clock) and increasing
//! clockwise on screen because the y axis points down.

pub mod config;
pub mod renderer;
pub mod slider;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SliderConfig;
pub use renderer::{NullRenderer, RenderFrame, SliderRenderer};
pub use slider::{ChangeEndStream, DragController, DragPhase, SliderModel, Subscription};

use glam::DVec2;

/// Widget configuration constants
pub mod consts {
    use std::f64::consts::PI;

    /// Default widget box (pixels)
    pub const DEFAULT_WIDTH: f64 = 120.0;
    pub const DEFAULT_HEIGHT: f64 = 120.0;

    /// Default ring geometry (pixels)
    pub const DEFAULT_RADIUS: f64 = 45.0;
    pub const DEFAULT_THICKNESS: f64 = 5.0;

    /// Default value range
    pub const DEFAULT_MIN: i64 = 0;
    pub const DEFAULT_MAX: i64 = 100;
    pub const DEFAULT_UNITS: &str = "%";

    /// Handle dot radius (pixels)
    pub const HANDLE_RADIUS: f64 = 10.0;

    /// Angle the slider is seeded at before any value is set (bottom of the circle)
    pub const INITIAL_ANGLE: f64 = PI;

    /// Fixed start angle of the progress arc, in arc-generator convention
    /// (0 at 12 o'clock, clockwise)
    pub const SWEEP_START_ANGLE: f64 = PI;

    /// Extra sweep so a zero value still renders a hairline
    pub const ZERO_SWEEP_EPSILON: f64 = 0.001;

    /// Pointer moves closer than this to the center carry no direction
    pub const CENTER_EPSILON: f64 = 1e-6;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Replace NaN and infinities with zero
#[inline]
pub fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// Round to the nearest integer, halves toward positive infinity
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    // round() takes negative halves away from zero; x + 0.5 can itself round up
    let r = x.round();
    if r - x == -0.5 { r + 1.0 } else { r }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(PI), PI);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(-1.5 * PI) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.5), -3.5);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(41.49), 41.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-0.6), -1.0);
    }

    #[test]
    fn test_polar_roundtrip() {
        let p = polar_to_cartesian(45.0, -PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 45.0).abs() < 1e-9);

        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 45.0).abs() < 1e-9);
        assert!((theta + PI / 2.0).abs() < 1e-9);
    }
}
