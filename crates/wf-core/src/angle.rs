//! Angle math for wheel geometry
//!
//! All angles are radians. A wheel's slices live in the wheel's own
//! unrotated frame; the rendering layer applies the wheel rotation on top.

use std::f64::consts::TAU;

/// Normalize an angle into `[0, 2π)`.
///
/// Works for arbitrarily large magnitudes and negative inputs.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the remainder rounds up
    if a >= TAU { 0.0 } else { a }
}

/// Minimal forward (counter-pointer) delta from `current` to `target`,
/// in `[0, 2π)`. The wheel always spins forward, never backward.
#[inline]
pub fn forward_delta(current: f64, target: f64) -> f64 {
    normalize_angle(target - normalize_angle(current))
}

/// Angular span of one slice on a wheel with `count` equal slices.
#[inline]
pub fn slice_span(count: usize) -> f64 {
    TAU / count as f64
}

/// Center angle of slice `index` on a wheel with `count` equal slices,
/// in the wheel's unrotated frame.
#[inline]
pub fn slice_center(index: usize, count: usize) -> f64 {
    let span = slice_span(count);
    index as f64 * span + span / 2.0
}
