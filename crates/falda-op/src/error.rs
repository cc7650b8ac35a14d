//! Error types for the operator-algebra crate.

use thiserror::Error;

/// Errors produced by operator construction and algebra.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpError {
    /// Binary operation on operators of different widths.
    #[error("qubit count mismatch: left operand has {expected} qubits, right has {got}")]
    QubitCountMismatch {
        /// Width of the left operand.
        expected: usize,
        /// Width of the right operand.
        got: usize,
    },

    /// A term's z and x flag vectors differ in length.
    #[error("z/x flag vectors differ in length: {z_len} vs {x_len}")]
    FlagLengthMismatch {
        /// Length of the z-flag vector.
        z_len: usize,
        /// Length of the x-flag vector.
        x_len: usize,
    },

    /// A qubit position lies beyond the operator's register.
    #[error("position {position} is out of range for a {num_qubits}-qubit operator")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
        /// Width of the operator.
        num_qubits: usize,
    },

    /// A label character outside {I, X, Y, Z}.
    #[error("'{symbol}' is not a Pauli label (expected one of I, X, Y, Z)")]
    InvalidLabel {
        /// The offending character.
        symbol: char,
    },

    /// Label strings of inconsistent length in one operator.
    #[error("label length mismatch: expected {expected} factors, got {got}")]
    LabelLengthMismatch {
        /// Expected number of factors.
        expected: usize,
        /// Actual number of factors.
        got: usize,
    },

    /// An operator was requested from an empty term list.
    #[error("cannot build an operator from an empty term list")]
    NoTerms,
}

/// Result type for operator-algebra operations.
pub type OpResult<T> = Result<T, OpError>;
