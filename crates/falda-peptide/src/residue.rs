//! Amino-acid residue symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PeptideError, PeptideResult};

/// The 20 standard one-letter amino-acid codes.
const RESIDUE_SYMBOLS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// A validated one-letter amino-acid code.
///
/// Construction fails for anything outside the 20 standard symbols; absent
/// residues (a non-existent side bead) are `Option<Residue>::None` rather
/// than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Residue(char);

impl Residue {
    /// Validate and wrap a residue symbol.
    pub fn new(symbol: char) -> PeptideResult<Self> {
        if RESIDUE_SYMBOLS.contains(symbol) {
            Ok(Self(symbol))
        } else {
            Err(PeptideError::InvalidResidue { symbol })
        }
    }

    /// The one-letter code.
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Residue {
    type Error = PeptideError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Residue::new(symbol)
    }
}
