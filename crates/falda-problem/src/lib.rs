//! `falda-problem` — reduction passes and the sampling-problem boundary.
//!
//! Post-processing over an assembled folding Hamiltonian:
//!
//! - [`fixing::fix_qubits`] pins the symmetry-redundant turn qubits,
//!   breaking rotational/reflective degeneracy.
//! - [`compaction::remove_unused_qubits`] strips register positions no term
//!   uses, shrinking the operator.
//! - [`problem::SamplingProblem`] is the boundary an eigensolver and result
//!   interpreter consume, with [`problem::ReductionRecord`] carrying the
//!   fixed/removed bookkeeping through unchanged.
//! - [`interaction::RandomInteraction`] synthesizes a reproducible
//!   placeholder pair-energy table from an explicitly seeded generator.
//!
//! # Quick start
//!
//! ```rust
//! use falda_op::PauliOp;
//! use falda_problem::{OpAccum, fix_qubits, remove_unused_qubits};
//!
//! let mut hamiltonian = OpAccum::Zero;
//! hamiltonian += PauliOp::z_on(7, [4, 6]).unwrap();
//! hamiltonian += PauliOp::z_on(7, [4]).unwrap();
//!
//! let fixed = fix_qubits(&hamiltonian, false);
//! let (compact, removed) = remove_unused_qubits(fixed.as_op().unwrap());
//! // Only {4, 6} stay in use; everything else drops out of the register.
//! assert_eq!(compact.num_qubits(), 2);
//! assert_eq!(removed, vec![0, 1, 2, 3, 5]);
//! ```

pub mod compaction;
pub mod error;
pub mod fixing;
pub mod interaction;
pub mod problem;

pub use compaction::remove_unused_qubits;
pub use error::{ProblemError, ProblemResult};
pub use fixing::{OpAccum, fix_qubits, fixed_positions};
pub use interaction::{Interaction, RandomInteraction};
pub use problem::{EigensolverResult, ReductionRecord, SamplingProblem};
