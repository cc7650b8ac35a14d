//! `falda-peptide` — turn encoding and the bead/chain model.
//!
//! Maps each monomer ("bead") of a lattice-folded chain to a pair of binary
//! turn qubits and derives the four mutually-exclusive, collectively-
//! exhaustive direction indicators a Hamiltonian assembly consumes:
//!
//! - [`turns::turn_qubit`] builds the per-position 0/1 projector
//!   `0.5·I − 0.5·Z_idx` over the 2·(chain_len − 1)-qubit turn register.
//! - [`turns::TurnIndicators`] derives the four direction projectors from a
//!   bead's turn-qubit pair and embeds them into the full register.
//! - [`bead::MainBead`] / [`bead::SideBead`] own a bead's residue, turn pair
//!   and embedded indicators; [`chain::MainChain`] and [`chain::Peptide`]
//!   aggregate them and project the residue sequence.
//!
//! # Quick start
//!
//! ```rust
//! use falda_peptide::{Peptide, turn_qubit};
//!
//! let peptide = Peptide::new("APRL", &[None, Some('G'), None, None]).unwrap();
//! assert_eq!(peptide.main_chain().len(), 4);
//! assert!(peptide.has_side_chain_second_bead());
//!
//! // 4 beads → 6 turn qubits.
//! let q = turn_qubit(4, 0).unwrap();
//! assert_eq!(q.num_qubits(), 6);
//! ```

pub mod bead;
pub mod chain;
pub mod error;
pub mod residue;
pub mod turns;

pub use bead::{Bead, ChainKind, MainBead, SideBead};
pub use chain::{MainChain, Peptide, SideChain};
pub use error::{PeptideError, PeptideResult};
pub use residue::Residue;
pub use turns::{TurnIndicators, turn_qubit};
