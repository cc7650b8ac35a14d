//! Single-qubit Pauli factors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-qubit Pauli factor.
///
/// Encoded internally as a (z, x) flag pair: Z sets the z flag, X sets the
/// x flag, Y sets both, I sets neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliFactor {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliFactor {
    /// Decode a factor from its (z, x) flag pair.
    pub fn from_flags(z: bool, x: bool) -> Self {
        match (z, x) {
            (false, false) => PauliFactor::I,
            (false, true) => PauliFactor::X,
            (true, true) => PauliFactor::Y,
            (true, false) => PauliFactor::Z,
        }
    }

    /// The (z, x) flag pair for this factor.
    pub fn flags(self) -> (bool, bool) {
        match self {
            PauliFactor::I => (false, false),
            PauliFactor::X => (false, true),
            PauliFactor::Y => (true, true),
            PauliFactor::Z => (true, false),
        }
    }

    /// The label character for this factor.
    pub fn label(self) -> char {
        match self {
            PauliFactor::I => 'I',
            PauliFactor::X => 'X',
            PauliFactor::Y => 'Y',
            PauliFactor::Z => 'Z',
        }
    }

    /// Parse a label character.
    pub fn from_label(symbol: char) -> Option<Self> {
        match symbol {
            'I' => Some(PauliFactor::I),
            'X' => Some(PauliFactor::X),
            'Y' => Some(PauliFactor::Y),
            'Z' => Some(PauliFactor::Z),
            _ => None,
        }
    }
}

impl fmt::Display for PauliFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
