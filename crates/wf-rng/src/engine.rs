//! xoshiro256** generator with secure seeding

use std::time::{SystemTime, UNIX_EPOCH};

use rand::TryRngCore;
use rand::rngs::OsRng;

use wf_core::{WheelError, WheelResult};

/// Where the generator's initial state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// 32 bytes drawn from the operating system's secure entropy source
    Os,
    /// Time-derived fallback seed; predictable, surfaced with a warning
    TimeFallback,
    /// State injected through the test-only interface
    Injected,
}

/// Substitute state when seeding yields all zeros. An all-zero state is a
/// fixed point of xoshiro256** and must never occur.
const NONZERO_FALLBACK: [u64; 4] = [
    0x9E37_79B9_7F4A_7C15,
    0xBF58_476D_1CE4_E5B9,
    0x94D0_49BB_1331_11EB,
    0x2545_F491_4F6C_DD1D,
];

/// 53-bit mantissa scale for `next_f64`
const F64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// WheelForge randomness engine
///
/// Owns 256 bits of xoshiro256** state, mutated in place by every draw.
/// Exactly one engine should exist per session; the `&mut self` surface
/// forces callers to serialize draws through one sequence point.
#[derive(Debug, Clone)]
pub struct WheelRng {
    /// Generator state, never all-zero
    state: [u64; 4],
    /// How the state was seeded
    seed_source: SeedSource,
}

impl WheelRng {
    /// Create an engine seeded from the OS entropy source.
    ///
    /// Falls back to a time-derived seed only when no secure source is
    /// available; that path is predictable and logs a warning.
    pub fn new() -> Self {
        let mut bytes = [0u8; 32];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => {
                let mut words = [0u64; 4];
                for (i, word) in words.iter_mut().enumerate() {
                    let mut le = [0u8; 8];
                    le.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
                    *word = u64::from_le_bytes(le);
                }
                Self::from_words(words, SeedSource::Os)
            }
            Err(err) => {
                log::warn!(
                    "no secure entropy source available ({err}); \
                     seeding from system time; outcomes are predictable"
                );
                Self::from_words(Self::time_seed(), SeedSource::TimeFallback)
            }
        }
    }

    /// How this engine was seeded.
    pub fn seed_source(&self) -> SeedSource {
        self.seed_source
    }

    /// Advance the state one xoshiro256** step and return 64 uniform bits.
    pub fn next_u64(&mut self) -> u64 {
        let result = self.state[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;

        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);

        result
    }

    /// Uniform float in `[0, 1)`: top 53 bits of one draw over 2^53.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_SCALE
    }

    /// Uniform integer in `[0, bound)` with no modulo bias.
    ///
    /// `bound == 1` returns 0 without consuming a draw. Rejection sampling
    /// costs less than one extra draw on average for any bound.
    pub fn next_bounded(&mut self, bound: u64) -> WheelResult<u64> {
        if bound == 0 {
            return Err(WheelError::InvalidArgument(
                "bound must be positive".into(),
            ));
        }
        Ok(self.bounded(bound))
    }

    /// Unbiased in-place Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) {
        for i in (1..seq.len()).rev() {
            let j = self.bounded(i as u64 + 1) as usize;
            seq.swap(i, j);
        }
    }

    /// Uniformly chosen element of `seq`.
    pub fn pick<'a, T>(&mut self, seq: &'a [T]) -> WheelResult<&'a T> {
        if seq.is_empty() {
            return Err(WheelError::EmptyInput);
        }
        Ok(&seq[self.bounded(seq.len() as u64) as usize])
    }

    /// Rejection-sampled draw; caller guarantees `bound > 0`.
    fn bounded(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        if bound == 1 {
            return 0;
        }
        // Largest multiple of `bound` representable in 64 bits; draws at or
        // above it would skew the low residues
        let limit = u64::MAX - (u64::MAX % bound);
        loop {
            let draw = self.next_u64();
            if draw < limit {
                return draw % bound;
            }
        }
    }

    fn from_words(words: [u64; 4], seed_source: SeedSource) -> Self {
        let state = if words == [0; 4] {
            NONZERO_FALLBACK
        } else {
            words
        };
        Self { state, seed_source }
    }

    fn time_seed() -> [u64; 4] {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(NONZERO_FALLBACK[3]);
        [
            nanos ^ NONZERO_FALLBACK[0],
            nanos.rotate_left(17) ^ NONZERO_FALLBACK[1],
            nanos.rotate_left(31) ^ NONZERO_FALLBACK[2],
            nanos.rotate_left(47) ^ NONZERO_FALLBACK[3],
        ]
    }
}

#[cfg(any(test, feature = "test-inject"))]
impl WheelRng {
    /// Create an engine from explicit state words. Test-only.
    ///
    /// Rejects the all-zero state, which the generator can never leave.
    pub fn from_state(words: [u64; 4]) -> WheelResult<Self> {
        if words == [0; 4] {
            return Err(WheelError::MalformedState(
                "all-zero state is a fixed point".into(),
            ));
        }
        Ok(Self {
            state: words,
            seed_source: SeedSource::Injected,
        })
    }

    /// Overwrite the state of an existing engine. Test-only.
    ///
    /// Rejects slices that are not exactly four words, and the all-zero
    /// state.
    pub fn inject_state(&mut self, words: &[u64]) -> WheelResult<()> {
        let words: [u64; 4] = words.try_into().map_err(|_| {
            WheelError::MalformedState(format!("expected 4 words, got {}", words.len()))
        })?;
        if words == [0; 4] {
            return Err(WheelError::MalformedState(
                "all-zero state is a fixed point".into(),
            ));
        }
        self.state = words;
        self.seed_source = SeedSource::Injected;
        Ok(())
    }

    /// Derive a full 256-bit state from a 64-bit seed via splitmix64.
    /// Test-only; standard seeding procedure for the xoshiro family.
    pub fn from_seed(seed: u64) -> Self {
        let mut s = seed;
        let mut words = [0u64; 4];
        for word in &mut words {
            s = s.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = s;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            *word = z ^ (z >> 31);
        }
        Self::from_words(words, SeedSource::Injected)
    }
}

impl Default for WheelRng {
    fn default() -> Self {
        Self::new()
    }
}
