//! Winner selection and target angle computation

use std::f64::consts::TAU;

use wf_core::{WheelError, WheelResult, forward_delta, normalize_angle, slice_center};
use wf_rng::WheelRng;

use crate::state::SpinState;
use crate::timing::SpinTiming;

/// Begin a spin: draw the winner and freeze the animation target.
///
/// Exactly one unbiased bounded draw decides the winning index. The target
/// angle is the wheel rotation that puts the winner's slice center under
/// `pointer_angle`, reached by the minimal forward delta from
/// `current_angle` plus the configured number of guaranteed full turns.
/// The wheel never spins backward.
///
/// `now_ms` is the caller's clock at the start instant; the same clock must
/// feed every later `progress_angle` / `is_complete` sample.
///
/// A single-entry wheel is valid: the slice spans the whole circle and that
/// entry always wins. An empty wheel is `EmptyWheel`; a non-positive or
/// non-finite duration is `InvalidArgument`.
pub fn begin_spin<T: Clone>(
    rng: &mut WheelRng,
    entries: &[T],
    pointer_angle: f64,
    current_angle: f64,
    timing: &SpinTiming,
    now_ms: f64,
) -> WheelResult<SpinState<T>> {
    if entries.is_empty() {
        return Err(WheelError::EmptyWheel);
    }
    if !timing.duration_ms.is_finite() || timing.duration_ms <= 0.0 {
        return Err(WheelError::InvalidArgument(format!(
            "spin duration must be positive, got {}",
            timing.duration_ms
        )));
    }

    let winning_index = rng.next_bounded(entries.len() as u64)? as usize;

    // Wheel rotation that rests the winner's slice center on the pointer
    let center = slice_center(winning_index, entries.len());
    let rest_angle = normalize_angle(pointer_angle - center);

    let delta = forward_delta(current_angle, rest_angle);
    let target_angle = current_angle + delta + timing.min_full_rotations as f64 * TAU;

    Ok(SpinState::new(
        winning_index,
        entries[winning_index].clone(),
        current_angle,
        target_angle,
        now_ms,
        timing.duration_ms,
        timing.min_full_rotations,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn timing(duration_ms: f64, min_full_rotations: u32) -> SpinTiming {
        SpinTiming {
            profile: crate::SpinProfile::Custom,
            duration_ms,
            min_full_rotations,
        }
    }

    #[test]
    fn test_empty_wheel_rejected() {
        let mut rng = WheelRng::from_seed(1);
        let entries: Vec<&str> = vec![];
        let result = begin_spin(&mut rng, &entries, 0.0, 0.0, &SpinTiming::normal(), 0.0);
        assert_eq!(result.unwrap_err(), WheelError::EmptyWheel);
    }

    #[test]
    fn test_bad_duration_rejected() {
        let mut rng = WheelRng::from_seed(1);
        let entries = ["a", "b"];
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let result = begin_spin(&mut rng, &entries, 0.0, 0.0, &timing(bad, 1), 0.0);
            assert!(matches!(result, Err(WheelError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_single_entry_always_wins() {
        let mut rng = WheelRng::from_seed(77);
        let entries = ["only"];
        for (pointer, current) in [
            (0.0, 0.0),
            (PI / 3.0, 1.0),
            (-PI, 123.456),
            (3.0 * TAU, -9.0),
        ] {
            let spin =
                begin_spin(&mut rng, &entries, pointer, current, &timing(1000.0, 0), 0.0).unwrap();
            assert_eq!(spin.winning_index(), 0);
            assert_eq!(*spin.resolve_winner(), "only");
        }
    }

    #[test]
    fn test_progress_endpoints_exact() {
        let mut rng = WheelRng::from_seed(5);
        let entries = ["a", "b", "c"];
        let spin = begin_spin(&mut rng, &entries, 0.0, 1.25, &timing(800.0, 3), 10_000.0).unwrap();

        assert_eq!(spin.progress_angle(10_000.0), spin.start_angle());
        assert_eq!(spin.progress_angle(10_800.0), spin.target_angle());
        // Late samples stay pinned to the target
        assert_eq!(spin.progress_angle(99_999.0), spin.target_angle());

        assert!(!spin.is_complete(10_799.9));
        assert!(spin.is_complete(10_800.0));
        assert!(spin.is_complete(11_000.0));
    }

    #[test]
    fn test_progress_is_pure() {
        let mut rng = WheelRng::from_seed(8);
        let entries = [1, 2, 3, 4, 5];
        let spin = begin_spin(&mut rng, &entries, 0.5, 2.0, &timing(1500.0, 4), 0.0).unwrap();
        for now in [0.0, 250.0, 750.0, 1499.0, 1500.0, 2000.0] {
            assert_eq!(spin.progress_angle(now), spin.progress_angle(now));
        }
    }

    #[test]
    fn test_end_to_end_forced_index() {
        // State whose first draw is 2^63 + 18: accepted by rejection
        // sampling and ≡ 2 (mod 4), so entry C wins
        let mut rng = WheelRng::from_state([1, 1 << 56, 3, 4]).unwrap();
        let entries = ["A", "B", "C", "D"];
        let spin = begin_spin(&mut rng, &entries, 0.0, 0.0, &timing(1000.0, 5), 0.0).unwrap();

        assert_eq!(spin.winning_index(), 2);
        assert_eq!(*spin.resolve_winner(), "C");

        // C's center sits at 5π/4; resting it on pointer 0 needs a wheel
        // angle of 3π/4, plus 5 full turns
        let expected_target = 3.0 * PI / 4.0 + 5.0 * TAU;
        assert_relative_eq!(spin.target_angle(), expected_target, max_relative = 1e-12);

        // Halfway through: eased progress 1 - 0.5³ = 0.875
        let expected_mid = 0.875 * expected_target;
        assert_relative_eq!(spin.progress_angle(500.0), expected_mid, max_relative = 1e-12);

        assert!(spin.confirm_landed(&"C").is_ok());
    }

    #[test]
    fn test_winner_survives_entry_mutation() {
        let mut rng = WheelRng::from_state([1, 1 << 56, 3, 4]).unwrap();
        let mut entries = vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ];
        let spin = begin_spin(&mut rng, &entries, 0.0, 0.0, &timing(1000.0, 5), 0.0).unwrap();

        entries.remove(1);
        entries.push("E".to_string());

        assert_eq!(spin.resolve_winner(), "C");
        assert_eq!(spin.winning_index(), 2);
        // Angle math was frozen with the original list length
        assert_relative_eq!(
            spin.target_angle(),
            3.0 * PI / 4.0 + 5.0 * TAU,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_confirm_landed_strict() {
        let mut rng = WheelRng::from_state([1, 1 << 56, 3, 4]).unwrap();
        let entries = ["A", "B", "C", "D"];
        let spin = begin_spin(&mut rng, &entries, 0.0, 0.0, &timing(1000.0, 1), 0.0).unwrap();

        assert!(spin.confirm_landed(spin.resolve_winner()).is_ok());
        assert_eq!(
            spin.confirm_landed(&"A"),
            Err(WheelError::WinnerMismatch { expected: 2 })
        );
    }

    #[test]
    fn test_always_spins_forward() {
        let mut rng = WheelRng::from_seed(0xF0F0);
        let entries = ["a", "b", "c", "d", "e", "f", "g"];
        for min_rot in [0u32, 1, 5] {
            for _ in 0..200 {
                let pointer = (rng.next_f64() - 0.5) * 8.0 * TAU;
                let current = (rng.next_f64() - 0.5) * 8.0 * TAU;
                let spin =
                    begin_spin(&mut rng, &entries, pointer, current, &timing(1000.0, min_rot), 0.0)
                        .unwrap();
                let travel = spin.target_angle() - current;
                let base = min_rot as f64 * TAU;
                assert!(
                    travel >= base && travel < base + TAU,
                    "travel {travel} outside [{base}, {})",
                    base + TAU
                );
            }
        }
    }

    #[test]
    fn test_winner_rests_under_pointer() {
        // The final normalized wheel angle must place the winner's slice
        // center exactly on the pointer
        let mut rng = WheelRng::from_seed(0xBEEF);
        let entries = ["a", "b", "c", "d", "e"];
        for _ in 0..100 {
            let pointer = rng.next_f64() * TAU;
            let current = (rng.next_f64() - 0.5) * 4.0 * TAU;
            let spin =
                begin_spin(&mut rng, &entries, pointer, current, &timing(500.0, 2), 0.0).unwrap();
            let rest = normalize_angle(spin.target_angle());
            let center = slice_center(spin.winning_index(), entries.len());
            let landed = normalize_angle(rest + center);
            let err = normalize_angle(landed - pointer);
            let err = err.min(TAU - err);
            assert!(err < 1e-9, "pointer miss of {err} rad");
        }
    }

    #[test]
    fn test_uniform_winner_distribution() {
        let mut rng = WheelRng::from_seed(0x1234);
        let entries = ["a", "b", "c", "d"];
        let mut counts = [0u32; 4];
        let trials = 40_000;
        for _ in 0..trials {
            let spin =
                begin_spin(&mut rng, &entries, 0.0, 0.0, &timing(100.0, 0), 0.0).unwrap();
            counts[spin.winning_index()] += 1;
        }
        // Expected 10_000 per entry; ±400 is well past 4σ
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (9_600..=10_400).contains(&count),
                "entry {i} won {count} times"
            );
        }
    }
}
