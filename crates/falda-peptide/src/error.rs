//! Error types for the peptide crate.

use falda_op::OpError;
use thiserror::Error;

/// Errors produced by residue validation and chain construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PeptideError {
    /// A residue symbol outside the 20 standard one-letter codes.
    #[error("'{symbol}' is not a valid residue symbol")]
    InvalidResidue {
        /// The offending character.
        symbol: char,
    },

    /// A chain needs at least two beads to define a turn.
    #[error("chain length must be at least 2, got {len}")]
    ChainTooShort {
        /// The offending length.
        len: usize,
    },

    /// The side-residue list must supply one entry per main bead.
    #[error("expected {expected} side-chain entries (one per main bead), got {got}")]
    SideChainLengthMismatch {
        /// Number of main beads.
        expected: usize,
        /// Number of side-chain entries supplied.
        got: usize,
    },

    /// Side chains cannot attach to the first or last main bead.
    #[error("a side chain cannot attach to main bead {index}")]
    SideChainNotAllowed {
        /// The offending main-bead index.
        index: usize,
    },

    /// A turn-qubit pair must live on one register.
    #[error("turn-qubit register mismatch: {left} vs {right} qubits")]
    TurnRegisterMismatch {
        /// Width of the first turn qubit.
        left: usize,
        /// Width of the second turn qubit.
        right: usize,
    },

    /// Operator algebra error.
    #[error("operator algebra error: {0}")]
    Op(#[from] OpError),
}

/// Result type for peptide operations.
pub type PeptideResult<T> = Result<T, PeptideError>;
