//! Symmetry-breaking qubit fixing.
//!
//! The first two lattice turns of the main chain can be chosen freely
//! without loss of generality, which pins turn qubits 0–3; when the second
//! main bead carries no side chain, qubit 5 is pinned as well. Fixing
//! forces the diagonal (z) flag to false at those positions in every term,
//! so the fixed qubits drop out of the optimization.

use falda_op::{OpResult, PauliOp, PauliTerm};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use tracing::debug;

/// A Hamiltonian accumulator: the scalar zero placeholder or an operator.
///
/// Assembly code starts from `Zero` and adds operator summands; the fixing
/// pass passes `Zero` through untouched instead of treating it as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpAccum {
    /// No summands accumulated yet.
    Zero,
    /// An operator value.
    Op(PauliOp),
}

impl OpAccum {
    /// The operator value, if one has been accumulated.
    pub fn as_op(&self) -> Option<&PauliOp> {
        match self {
            OpAccum::Zero => None,
            OpAccum::Op(op) => Some(op),
        }
    }

    /// True while no summand has been accumulated.
    pub fn is_zero(&self) -> bool {
        matches!(self, OpAccum::Zero)
    }

    /// Add a summand; widths are checked once an operator is present.
    pub fn accumulate(&mut self, summand: PauliOp) -> OpResult<()> {
        match self {
            OpAccum::Zero => {
                *self = OpAccum::Op(summand);
                Ok(())
            }
            OpAccum::Op(op) => {
                *op = op.checked_add(&summand)?;
                Ok(())
            }
        }
    }
}

impl From<PauliOp> for OpAccum {
    fn from(op: PauliOp) -> Self {
        OpAccum::Op(op)
    }
}

impl AddAssign<PauliOp> for OpAccum {
    /// # Panics
    /// Panics if the summand's qubit count differs from the accumulated
    /// operator's.
    fn add_assign(&mut self, rhs: PauliOp) {
        match self.accumulate(rhs) {
            Ok(()) => {}
            Err(e) => panic!("operator accumulation failed: {e}"),
        }
    }
}

/// The positions pinned by the symmetry-breaking convention: {0, 1, 2, 3},
/// plus 5 when the second main bead has no side chain.
pub fn fixed_positions(has_side_chain_second_bead: bool) -> Vec<usize> {
    let mut positions = vec![0, 1, 2, 3];
    if !has_side_chain_second_bead {
        positions.push(5);
    }
    positions
}

/// Force the symmetry-fixed qubits to the identity factor.
///
/// A `Zero` accumulator is returned unchanged. Otherwise the operator is
/// reduced, then the z flag at every fixed position is cleared in every
/// term; x flags and coefficients are untouched, positions beyond the
/// register are silently skipped, and the qubit count is preserved.
pub fn fix_qubits(accum: &OpAccum, has_side_chain_second_bead: bool) -> OpAccum {
    let OpAccum::Op(operator) = accum else {
        return accum.clone();
    };
    let reduced = operator.reduce();
    let positions = fixed_positions(has_side_chain_second_bead);
    debug!(
        num_qubits = reduced.num_qubits(),
        n_terms = reduced.n_terms(),
        ?positions,
        "fixing symmetry qubits"
    );

    let terms: Vec<PauliTerm> = reduced
        .terms()
        .iter()
        .map(|term| {
            positions
                .iter()
                .fold(term.clone(), |t, &position| t.with_z_flag(position, false))
        })
        .collect();
    let fixed = PauliOp::from_terms(reduced.num_qubits(), terms)
        .expect("clearing z flags preserves term widths");
    OpAccum::Op(fixed)
}
