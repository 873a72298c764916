//! wf-core: Shared types and utilities for WheelForge
//!
//! This crate provides the error taxonomy and angle math used across all
//! WheelForge crates.

mod angle;
mod error;

pub use angle::*;
pub use error::*;
