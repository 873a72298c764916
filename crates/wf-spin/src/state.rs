//! Frozen spin state and the pure progress function

use serde::{Deserialize, Serialize};

use wf_core::{WheelError, WheelResult};

use crate::curve::ease_out_cubic;

/// A spin in flight: winner, angles, and clock window, all frozen at
/// `begin_spin` time.
///
/// Immutable once created: a spin cannot be redirected mid-flight, and
/// mutations to the caller's entry list never invalidate it (the state owns
/// its own clone of the winning identity and all angle math is already
/// done). `T` is the caller's opaque entry identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinState<T> {
    winning_index: usize,
    winner: T,
    start_angle: f64,
    target_angle: f64,
    start_ms: f64,
    duration_ms: f64,
    min_full_rotations: u32,
}

impl<T> SpinState<T> {
    pub(crate) fn new(
        winning_index: usize,
        winner: T,
        start_angle: f64,
        target_angle: f64,
        start_ms: f64,
        duration_ms: f64,
        min_full_rotations: u32,
    ) -> Self {
        Self {
            winning_index,
            winner,
            start_angle,
            target_angle,
            start_ms,
            duration_ms,
            min_full_rotations,
        }
    }

    /// Index of the winning entry in the list passed to `begin_spin`.
    pub fn winning_index(&self) -> usize {
        self.winning_index
    }

    /// Wheel angle when the spin began.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Final wheel angle the animation settles on.
    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    /// Clock reading when the spin began (ms).
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Animation duration (ms).
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Guaranteed full turns folded into the target angle.
    pub fn min_full_rotations(&self) -> u32 {
        self.min_full_rotations
    }

    /// Display angle at clock reading `now_ms`.
    ///
    /// Pure function of (state, time): same arguments, same result,
    /// regardless of how often or how irregularly the renderer samples it.
    /// Returns exactly `start_angle` at the start instant and exactly
    /// `target_angle` once the duration has elapsed.
    pub fn progress_angle(&self, now_ms: f64) -> f64 {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let eased = ease_out_cubic(t);
        self.start_angle + (self.target_angle - self.start_angle) * eased
    }

    /// True once the animation window has fully elapsed.
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// The winner committed at `begin_spin` time, never recomputed from
    /// the animation's final angle.
    pub fn resolve_winner(&self) -> &T {
        &self.winner
    }

    /// Consume the state, yielding the committed winner.
    pub fn into_winner(self) -> T {
        self.winner
    }
}

impl<T: PartialEq> SpinState<T> {
    /// Check the renderer's reported landed entry against the committed
    /// winner.
    ///
    /// Strict: a mismatch is an integrity failure in the rendering layer
    /// and is rejected, not merely logged.
    pub fn confirm_landed(&self, reported: &T) -> WheelResult<()> {
        if *reported == self.winner {
            Ok(())
        } else {
            log::warn!(
                "renderer reported a landed entry that is not the committed winner (index {})",
                self.winning_index
            );
            Err(WheelError::WinnerMismatch {
                expected: self.winning_index,
            })
        }
    }
}
