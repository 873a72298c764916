//! # wf-rng — WheelForge Randomness Engine
//!
//! Provides the single source of randomness for wheel outcomes: a
//! xoshiro256** generator seeded from the operating system's entropy
//! source, with unbiased bounded draws and unbiased permutations.
//!
//! ## Guarantees
//!
//! - **Uniformity**: `next_bounded` uses rejection sampling, never plain
//!   modulo reduction, which is biased for any bound that does not evenly
//!   divide 2^64
//! - **Reproducibility**: identical state replays identical draw sequences,
//!   with a test-gated injection surface for fixing state in tests
//! - **Single-writer**: all draws go through `&mut WheelRng`; one engine
//!   per session, access serialized by the caller

pub mod engine;

pub use engine::*;
