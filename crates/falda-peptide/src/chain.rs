//! Chain aggregates: side chains, the main chain and the peptide.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

use falda_op::PauliOp;

use crate::bead::{MainBead, SideBead};
use crate::error::{PeptideError, PeptideResult};
use crate::residue::Residue;
use crate::turns::turn_qubit;

/// An ordered sequence of side beads attached to one main-chain bead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideChain {
    beads: Vec<SideBead>,
}

impl SideChain {
    /// Wrap a list of side beads.
    pub fn new(beads: Vec<SideBead>) -> Self {
        Self { beads }
    }

    /// All beads in the side chain.
    pub fn beads(&self) -> &[SideBead] {
        &self.beads
    }

    /// Number of beads.
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    /// True if the side chain has no beads.
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// The residue projection of the side chain.
    pub fn residue_sequence(&self) -> Vec<Option<Residue>> {
        self.beads.iter().map(|b| b.residue().copied()).collect()
    }
}

impl Index<usize> for SideChain {
    type Output = SideBead;

    fn index(&self, index: usize) -> &SideBead {
        &self.beads[index]
    }
}

/// The main chain of a peptide.
///
/// Main bead `i` owns the turn qubits at z-indices `2i` and `2i+1` of the
/// conformation register; the last bead has no turn pair since no turn
/// follows it. A side bead attached at `i` reuses the same z-indices of the
/// side-conformation block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainChain {
    beads: Vec<MainBead>,
}

impl MainChain {
    /// Build a main chain from its residue string and one optional side
    /// residue per main bead.
    ///
    /// The chain must have at least two beads, the side list one entry per
    /// bead, and side chains cannot attach to the first or last bead.
    pub fn new(main_residues: &str, side_residues: &[Option<char>]) -> PeptideResult<Self> {
        let chain_len = main_residues.chars().count();
        if chain_len < 2 {
            return Err(PeptideError::ChainTooShort { len: chain_len });
        }
        if side_residues.len() != chain_len {
            return Err(PeptideError::SideChainLengthMismatch {
                expected: chain_len,
                got: side_residues.len(),
            });
        }
        for (index, side) in side_residues.iter().enumerate() {
            if side.is_some() && (index == 0 || index == chain_len - 1) {
                return Err(PeptideError::SideChainNotAllowed { index });
            }
        }

        let mut beads = Vec::with_capacity(chain_len);
        for (index, symbol) in main_residues.chars().enumerate() {
            let residue = Residue::new(symbol)?;
            let turn_qubits = if index + 1 < chain_len {
                Some((
                    turn_qubit(chain_len, 2 * index)?,
                    turn_qubit(chain_len, 2 * index + 1)?,
                ))
            } else {
                None
            };
            let side_chain = match side_residues[index] {
                Some(side_symbol) => {
                    let side_residue = Residue::new(side_symbol)?;
                    let side_turns = (
                        turn_qubit(chain_len, 2 * index)?,
                        turn_qubit(chain_len, 2 * index + 1)?,
                    );
                    Some(SideChain::new(vec![SideBead::new(
                        index,
                        0,
                        Some(side_residue),
                        Some(side_turns),
                    )?]))
                }
                None => None,
            };
            beads.push(MainBead::new(index, Some(residue), turn_qubits, side_chain)?);
        }

        debug!(
            chain_len,
            n_side_chains = beads.iter().filter(|b| b.has_side_chain()).count(),
            "constructed main chain"
        );
        Ok(Self { beads })
    }

    /// All main beads in order.
    pub fn beads(&self) -> &[MainBead] {
        &self.beads
    }

    /// Number of main beads.
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    /// True if the chain has no beads.
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// The residue projection of the main chain.
    pub fn residue_sequence(&self) -> Vec<Option<Residue>> {
        self.beads.iter().map(|b| b.residue().copied()).collect()
    }

    /// One flag per main bead: does a side chain attach there?
    pub fn side_chain_hot_vector(&self) -> Vec<bool> {
        self.beads.iter().map(MainBead::has_side_chain).collect()
    }

    /// The turn qubit at `index`, sized for this chain's length.
    pub fn turn_qubit_at(&self, index: usize) -> PeptideResult<PauliOp> {
        turn_qubit(self.len(), index)
    }
}

impl Index<usize> for MainChain {
    type Output = MainBead;

    fn index(&self, index: usize) -> &MainBead {
        &self.beads[index]
    }
}

/// A peptide: the top-level aggregate over the main chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peptide {
    main_chain: MainChain,
}

impl Peptide {
    /// Build a peptide from residue sequences; see [`MainChain::new`].
    pub fn new(main_residues: &str, side_residues: &[Option<char>]) -> PeptideResult<Self> {
        Ok(Self {
            main_chain: MainChain::new(main_residues, side_residues)?,
        })
    }

    /// The main chain.
    pub fn main_chain(&self) -> &MainChain {
        &self.main_chain
    }

    /// The residue projection of the main chain.
    pub fn residue_sequence(&self) -> Vec<Option<Residue>> {
        self.main_chain.residue_sequence()
    }

    /// One flag per main bead: does a side chain attach there?
    pub fn side_chain_hot_vector(&self) -> Vec<bool> {
        self.main_chain.side_chain_hot_vector()
    }

    /// Whether the second main bead carries a side chain; the qubit-fixing
    /// pass conditions the fixed set on this.
    pub fn has_side_chain_second_bead(&self) -> bool {
        self.main_chain
            .beads()
            .get(1)
            .is_some_and(MainBead::has_side_chain)
    }
}
