//! Animation timing curves

/// Ease-out-cubic: fast launch, decelerating into the stop.
///
/// `t` is clamped progress in `[0, 1]`; returns eased progress in `[0, 1]`
/// with `ease_out_cubic(0) == 0` and `ease_out_cubic(1) == 1` exactly.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}
