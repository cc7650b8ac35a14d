//! Error types for the problem crate.

use thiserror::Error;

/// Errors produced by reduction bookkeeping.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProblemError {
    /// A removed-qubit index does not fit the reconstructed register.
    #[error("removed position {position} is out of range for a {total}-qubit register")]
    RemovedPositionOutOfRange {
        /// The offending position.
        position: usize,
        /// Width of the reconstructed register.
        total: usize,
    },

    /// The removal list names one position twice.
    #[error("removed position {position} appears more than once")]
    DuplicateRemovedPosition {
        /// The duplicated position.
        position: usize,
    },
}

/// Result type for problem-boundary operations.
pub type ProblemResult<T> = Result<T, ProblemError>;
