//! # wf-spin — WheelForge Spin Targeter
//!
//! Decides which wheel entry wins a spin and commits to it before a single
//! frame is drawn. The winner comes from one unbiased draw; the animation
//! that follows is purely cosmetic and can never change the outcome.
//!
//! ## Flow
//!
//! ```text
//! begin_spin(rng, entries, …)          one unbiased index draw
//!     │
//!     v
//! SpinState (frozen winner + target angle)
//!     │
//!     ├── progress_angle(now)          pure time → display angle
//!     ├── is_complete(now)
//!     └── resolve_winner()             the committed entry, never recomputed
//! ```
//!
//! The renderer samples `progress_angle` with its own clock; the targeter
//! owns no timer and never blocks. Frame rate and timing jitter affect only
//! how smooth the animation looks, never where it lands.

pub mod curve;
pub mod state;
pub mod targeter;
pub mod timing;

pub use curve::*;
pub use state::*;
pub use targeter::*;
pub use timing::*;
