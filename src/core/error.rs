//! Error handling logic

use std::fmt;

/// Error types covering every way a simulation can fail.
///
/// The simulation itself is deterministic, so none of these are transient:
/// an `InvalidArgument` means the problem definition was rejected up front,
/// and the other variants indicate internal-consistency failures that abort
/// the run rather than continuing with a corrupted state.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum GroverError {
    /// A problem parameter was rejected before any computation started,
    /// e.g. zero potential solutions or more marked items than items.
    InvalidArgument {
        /// Why the argument was rejected
        message: String,
    },

    /// Two vectors of differing length reached a vector-algebra operation.
    /// This is a programming error in the caller, not a user-recoverable
    /// condition; it is propagated up and is fatal to the run.
    DimensionMismatch {
        /// Length the operation expected
        expected: usize,
        /// Length it actually received
        found: usize,
    },

    /// A numerical degeneracy the stopping-step geometry cannot resolve,
    /// e.g. a zero-dimensional state vector.
    Degenerate {
        /// Degeneracy description
        message: String,
    },
}

impl fmt::Display for GroverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroverError::InvalidArgument { message } => {
                write!(f, "Invalid Argument: {}", message)
            }
            GroverError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Dimension Mismatch: expected vector of length {}, found {}",
                    expected, found
                )
            }
            GroverError::Degenerate { message } => {
                write!(f, "Numerical Degeneracy: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GroverError {}
