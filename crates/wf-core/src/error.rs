//! Error types for WheelForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Wheel has no entries")]
    EmptyWheel,

    #[error("Empty input sequence")]
    EmptyInput,

    #[error("Malformed generator state: {0}")]
    MalformedState(String),

    #[error("Landed entry does not match the committed winner (index {expected})")]
    WinnerMismatch { expected: usize },
}

/// Result type alias
pub type WheelResult<T> = Result<T, WheelError>;
