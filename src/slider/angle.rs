//! Value <-> angle conversion
//!
//! Value `0` sits at angle π/2 (6 o'clock on screen) and values grow clockwise,
//! so a full `max` lands back on the starting point.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;

use crate::{finite_or_zero, normalize_angle, polar_to_cartesian, round_half_up};

/// Angle of value zero
pub const ZERO_VALUE_ANGLE: f64 = FRAC_PI_2;

/// Map a value onto the circle, result in (-π, π]
///
/// Non-finite values are treated as `0`. A non-positive `max` has no angular
/// scale, so everything maps to [`ZERO_VALUE_ANGLE`].
pub fn value_to_angle(value: f64, max: i64) -> f64 {
    let turns = (finite_or_zero(value) / max as f64).rem_euclid(1.0);
    let angle = turns * TAU + FRAC_PI_2;
    if !angle.is_finite() {
        return ZERO_VALUE_ANGLE;
    }
    normalize_angle(angle)
}

/// Project an angle back to an integer value in `[0, max]`
///
/// Non-finite angles are treated as `0` radians.
pub fn angle_to_value(angle: f64, max: i64) -> i64 {
    let angle = finite_or_zero(angle);
    let degrees = (angle - FRAC_PI_2).to_degrees().rem_euclid(360.0);
    round_half_up(degrees / 360.0 * max as f64) as i64
}

/// Cartesian offset from the circle center for an angle
#[inline]
pub fn angle_to_offset(angle: f64, radius: f64) -> DVec2 {
    polar_to_cartesian(radius, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const R: f64 = 45.0;

    fn pointer_value(x: f64, y: f64) -> i64 {
        angle_to_value(y.atan2(x), 100)
    }

    #[test]
    fn test_zero_value_is_start_angle() {
        assert!((value_to_angle(0.0, 100) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angle_to_value(value_to_angle(0.0, 100), 100), 0);
    }

    #[test]
    fn test_cardinal_points() {
        // 6 o'clock is value zero, then clockwise on screen
        assert_eq!(pointer_value(0.0, R), 0);
        assert_eq!(pointer_value(-R, 0.0), 25);
        assert_eq!(pointer_value(0.0, -R), 50);
        assert_eq!(pointer_value(R, 0.0), 75);
    }

    #[test]
    fn test_max_wraps_to_zero() {
        let angle = value_to_angle(100.0, 100);
        assert_eq!(angle, FRAC_PI_2);
        assert_eq!(angle_to_value(angle, 100), 0);
        // Just before the start point reads max
        assert_eq!(angle_to_value(FRAC_PI_2 - 1e-6, 100), 100);
    }

    #[test]
    fn test_wraps_past_pi() {
        let angle = value_to_angle(40.0, 100);
        assert!(angle < 0.0);
        assert!((angle - (-0.7 * PI)).abs() < 1e-9);
        assert_eq!(angle_to_value(angle, 100), 40);
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(value_to_angle(f64::NAN, 100), ZERO_VALUE_ANGLE);
        assert_eq!(value_to_angle(5.0, 0), ZERO_VALUE_ANGLE);
        assert_eq!(angle_to_value(f64::NAN, 100), angle_to_value(0.0, 100));
        assert_eq!(angle_to_value(f64::INFINITY, 100), 75);
    }

    #[test]
    fn test_out_of_range_value_still_on_circle() {
        let angle = value_to_angle(250.0, 100);
        assert!(angle > -PI && angle <= PI);
        assert_eq!(angle_to_value(angle, 100), 50);
    }

    #[test]
    fn test_offset() {
        let p = angle_to_offset(ZERO_VALUE_ANGLE, R);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - R).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn roundtrip_below_max(max in 1i64..2000, frac in 0.0f64..1.0) {
            let v = ((max as f64) * frac).floor() as i64;
            prop_assume!(v < max);
            let angle = value_to_angle(v as f64, max);
            prop_assert_eq!(angle_to_value(angle, max), v);
        }

        #[test]
        fn angle_in_half_open_range(v in -10_000.0f64..10_000.0, max in 1i64..1000) {
            let angle = value_to_angle(v, max);
            prop_assert!(angle > -PI && angle <= PI);
        }

        #[test]
        fn value_within_range(angle in -1.0e6f64..1.0e6, max in 1i64..1000) {
            let v = angle_to_value(angle, max);
            prop_assert!((0..=max).contains(&v));
        }
    }
}
