//! Error types for the SPWS controller.
//!
//! The control loop itself never fails: stopping a stopped pump or
//! re-applying the current indicator are idempotent no-ops.  Errors only
//! exist at the edges: loading configuration and building the simulated
//! sample/schedule sequences.  All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from [`ConfigPort`](crate::app::ports::ConfigPort) operations and
/// [`Config::validate`](crate::config::Config::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the requested location.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Sequence errors
// ---------------------------------------------------------------------------

/// Rejected sample sequence or button schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A cyclic source needs at least one value.
    Empty,
    /// More values than the fixed-capacity buffer holds.
    TooLong { capacity: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "sequence is empty"),
            Self::TooLong { capacity } => {
                write!(f, "sequence exceeds capacity of {capacity}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
