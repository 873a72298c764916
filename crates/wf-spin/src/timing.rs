//! Spin timing presets

use serde::{Deserialize, Serialize};

/// Timing profile for spin animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast/Turbo mode
    Turbo,
    /// Studio mode (near-instant for testing)
    Studio,
    /// Custom timing
    Custom,
}

impl Default for SpinProfile {
    fn default() -> Self {
        Self::Normal
    }
}

/// Spin animation timing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Profile type
    pub profile: SpinProfile,

    /// Animation duration (ms), must be positive
    pub duration_ms: f64,

    /// Guaranteed full turns before settling on the winner
    pub min_full_rotations: u32,
}

impl SpinTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: SpinProfile::Normal,
            duration_ms: 4000.0,
            min_full_rotations: 5,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: SpinProfile::Turbo,
            duration_ms: 1200.0,
            min_full_rotations: 2,
        }
    }

    /// Studio mode (near-instant, for automated runs)
    pub fn studio() -> Self {
        Self {
            profile: SpinProfile::Studio,
            duration_ms: 300.0,
            min_full_rotations: 1,
        }
    }

    /// Get timing for profile
    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
            SpinProfile::Custom => Self::normal(),
        }
    }

    /// Scale duration by factor (< 1.0 = faster); rotations unchanged
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: SpinProfile::Custom,
            duration_ms: self.duration_ms * factor,
            min_full_rotations: self.min_full_rotations,
        }
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        let normal = SpinTiming::normal();
        let turbo = SpinTiming::turbo();
        let studio = SpinTiming::studio();

        assert!(turbo.duration_ms < normal.duration_ms);
        assert!(studio.duration_ms < turbo.duration_ms);
        assert!(turbo.min_full_rotations < normal.min_full_rotations);
    }

    #[test]
    fn test_scaled() {
        let half = SpinTiming::normal().scaled(0.5);
        assert_eq!(half.profile, SpinProfile::Custom);
        assert!((half.duration_ms - 2000.0).abs() < 1e-9);
        assert_eq!(half.min_full_rotations, 5);
    }
}
