//! The sampling-problem boundary.
//!
//! A sampling problem hands its assembled, fixed and compacted operator to
//! an eigensolver and maps the raw result back into a folding configuration.
//! The mapping needs the bookkeeping the reduction passes produce: which
//! positions were fixed and which were removed. Both lists are passed
//! through unchanged as ordered qubit indices.

use falda_op::PauliOp;
use serde::{Deserialize, Serialize};

use crate::error::{ProblemError, ProblemResult};

/// Raw output of a minimum-eigensolver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigensolverResult {
    /// The best bitstring found, qubit 0 first.
    pub bitstring: Vec<bool>,
    /// The eigenvalue the bitstring attains.
    pub eigenvalue: f64,
}

/// Bookkeeping produced by the fixing and compaction passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionRecord {
    /// Positions pinned by the symmetry-breaking convention, ascending.
    pub fixed_positions: Vec<usize>,
    /// Original indices removed by compaction, ascending.
    pub removed_positions: Vec<usize>,
}

impl ReductionRecord {
    /// Bundle the two index lists.
    pub fn new(fixed_positions: Vec<usize>, removed_positions: Vec<usize>) -> Self {
        Self {
            fixed_positions,
            removed_positions,
        }
    }

    /// Width of the original register for a given compacted width.
    pub fn original_width(&self, compact_width: usize) -> usize {
        compact_width + self.removed_positions.len()
    }

    /// Re-express a compacted bitstring on the original register.
    ///
    /// Removed positions carry no information and re-enter as `false`; all
    /// other positions take the compacted bits in order. Fixing never
    /// removes register slots, so fixed positions need no reinsertion.
    pub fn expand_bitstring(&self, compact: &[bool]) -> ProblemResult<Vec<bool>> {
        let total = self.original_width(compact.len());
        let mut is_removed = vec![false; total];
        for &position in &self.removed_positions {
            if position >= total {
                return Err(ProblemError::RemovedPositionOutOfRange { position, total });
            }
            if is_removed[position] {
                return Err(ProblemError::DuplicateRemovedPosition { position });
            }
            is_removed[position] = true;
        }

        let mut expanded = Vec::with_capacity(total);
        let mut next = 0;
        for position in 0..total {
            if is_removed[position] {
                expanded.push(false);
            } else {
                expanded.push(compact[next]);
                next += 1;
            }
        }
        Ok(expanded)
    }
}

/// A problem whose ground state an eigensolver samples.
pub trait SamplingProblem {
    /// The interpreted solution type.
    type Solution;

    /// The fully assembled, fixed and compacted qubit operator encoding the
    /// problem Hamiltonian.
    fn qubit_op(&self) -> &PauliOp;

    /// Interpret a raw eigensolver result as a folding configuration.
    fn interpret(&self, raw: &EigensolverResult) -> Self::Solution;
}
