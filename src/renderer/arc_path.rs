//! SVG path data for annular sectors
//!
//! Angles follow the arc-generator convention: 0 at 12 o'clock, increasing
//! clockwise, so a point is `(r·sin a, -r·cos a)` in y-down SVG space.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use glam::DVec2;

use crate::slider::ArcSweep;

/// Spans this close to a full turn are drawn as a closed ring
const FULL_RING_EPSILON: f64 = 1e-6;

#[inline]
fn arc_point(radius: f64, angle: f64) -> DVec2 {
    DVec2::new(radius * angle.sin(), -radius * angle.cos())
}

/// Format a coordinate with at most 3 decimals and no trailing zeros
fn fmt_num(x: f64) -> String {
    if x.abs() < 0.0005 {
        return "0".to_string();
    }
    let s = format!("{x:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

fn move_to(d: &mut String, p: DVec2) {
    let _ = write!(d, "M{},{}", fmt_num(p.x), fmt_num(p.y));
}

fn line_to(d: &mut String, p: DVec2) {
    let _ = write!(d, "L{},{}", fmt_num(p.x), fmt_num(p.y));
}

fn arc_to(d: &mut String, radius: f64, large: bool, clockwise: bool, p: DVec2) {
    let r = fmt_num(radius);
    let _ = write!(
        d,
        "A{r},{r},0,{},{},{},{}",
        u8::from(large),
        u8::from(clockwise),
        fmt_num(p.x),
        fmt_num(p.y)
    );
}

/// Path data for the band between `inner_radius` and `outer_radius`,
/// swept from `start_angle` to `end_angle`
pub fn arc_path(sweep: &ArcSweep) -> String {
    let inner = sweep.inner_radius.min(sweep.outer_radius).max(0.0);
    let outer = sweep.inner_radius.max(sweep.outer_radius);
    let (a0, a1) = if sweep.end_angle >= sweep.start_angle {
        (sweep.start_angle, sweep.end_angle)
    } else {
        (sweep.end_angle, sweep.start_angle)
    };
    let span = a1 - a0;

    let mut d = String::new();
    if outer <= 0.0 || !span.is_finite() || span <= 0.0 {
        d.push_str("M0,0Z");
        return d;
    }

    if span >= TAU - FULL_RING_EPSILON {
        // Two half-turns per circle; the inner one runs the other way to punch the hole
        move_to(&mut d, arc_point(outer, a0));
        arc_to(&mut d, outer, true, true, arc_point(outer, a0 + PI));
        arc_to(&mut d, outer, true, true, arc_point(outer, a0));
        if inner > 0.0 {
            move_to(&mut d, arc_point(inner, a0));
            arc_to(&mut d, inner, true, false, arc_point(inner, a0 - PI));
            arc_to(&mut d, inner, true, false, arc_point(inner, a0));
        }
        d.push('Z');
        return d;
    }

    let large = span > PI;
    move_to(&mut d, arc_point(outer, a0));
    arc_to(&mut d, outer, large, true, arc_point(outer, a1));
    if inner > 0.0 {
        line_to(&mut d, arc_point(inner, a1));
        arc_to(&mut d, inner, large, false, arc_point(inner, a0));
    } else {
        line_to(&mut d, DVec2::ZERO);
    }
    d.push('Z');
    d
}
