//! Turn encoding: per-position turn qubits and direction indicators.
//!
//! Each bead of an n-bead chain encodes the lattice turn that follows it in
//! two binary turn qubits, so a chain needs 2·(n−1) turn qubits. A turn
//! qubit is the diagonal projector
//!
//!   q = 0.5·I − 0.5·Z_idx
//!
//! with eigenvalues {0, 1}, idempotent under composition. From a bead's pair
//! (q0, q1) the four direction indicators are fixed algebraic combinations
//! that project onto the codes 00, 01, 10 and 11 respectively; they sum to
//! the identity and are pairwise orthogonal.

use falda_op::PauliOp;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{PeptideError, PeptideResult};

/// Build the turn qubit at `index` for a chain of `chain_len` beads.
///
/// The operator spans 2·(chain_len − 1) qubits and equals
/// `0.5·identity − 0.5·z_on({index})`.
pub fn turn_qubit(chain_len: usize, index: usize) -> PeptideResult<PauliOp> {
    if chain_len < 2 {
        return Err(PeptideError::ChainTooShort { len: chain_len });
    }
    let num_turn_qubits = 2 * (chain_len - 1);
    let identity = PauliOp::identity(num_turn_qubits);
    let z = PauliOp::z_on(num_turn_qubits, [index])?;
    Ok((&identity - &z) * 0.5)
}

/// The four turn-direction indicators derived from one turn-qubit pair.
///
/// Index `d` selects the indicator for direction code `d` (bit order q0 q1:
/// code 01 means q0 = 0, q1 = 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnIndicators {
    ops: [PauliOp; 4],
}

impl TurnIndicators {
    /// Derive the indicators from a turn-qubit pair on one register.
    ///
    /// The reference combinations are
    ///
    ///   ind0 = (I−q0)·(I−q1)
    ///   ind1 = q1·(q1−q0)
    ///   ind2 = q0·(q0−q1)
    ///   ind3 = q0·q1
    ///
    /// each finalized with `reduce`. The ind1/ind2 forms stay expressible in
    /// q0 and q1 alone; the projector identities make them agree with the
    /// naive (I−q0)·q1 and q0·(I−q1) variants.
    pub fn build(q0: &PauliOp, q1: &PauliOp) -> PeptideResult<Self> {
        if q0.num_qubits() != q1.num_qubits() {
            return Err(PeptideError::TurnRegisterMismatch {
                left: q0.num_qubits(),
                right: q1.num_qubits(),
            });
        }
        let identity = PauliOp::identity(q0.num_qubits());
        let ind0 = (&identity - q0).compose(&(&identity - q1))?.reduce();
        let ind1 = q1.compose(&(q1 - q0))?.reduce();
        let ind2 = q0.compose(&(q0 - q1))?.reduce();
        let ind3 = q0.compose(q1)?.reduce();
        Ok(Self {
            ops: [ind0, ind1, ind2, ind3],
        })
    }

    /// The four indicators in direction-code order.
    pub fn as_array(&self) -> &[PauliOp; 4] {
        &self.ops
    }

    /// Width of the register the indicators act on.
    pub fn num_qubits(&self) -> usize {
        self.ops[0].num_qubits()
    }

    /// Embed into a wider register with an identity block of `width` qubits
    /// appended after the indicators (indicators keep the low positions).
    #[must_use]
    pub fn tensor_identity_after(&self, width: usize) -> Self {
        let identity = PauliOp::identity(width);
        Self {
            ops: self.ops.clone().map(|op| op.tensor(&identity).reduce()),
        }
    }

    /// Embed into a wider register with an identity block of `width` qubits
    /// prepended before the indicators (indicators move to the high
    /// positions).
    #[must_use]
    pub fn tensor_identity_before(&self, width: usize) -> Self {
        let identity = PauliOp::identity(width);
        Self {
            ops: self.ops.clone().map(|op| identity.tensor(&op).reduce()),
        }
    }
}

impl Index<usize> for TurnIndicators {
    type Output = PauliOp;

    fn index(&self, direction: usize) -> &PauliOp {
        &self.ops[direction]
    }
}
