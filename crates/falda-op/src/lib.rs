//! `falda-op` — sparse symbolic Pauli-operator algebra.
//!
//! The foundation of the falda encoding stack: a sparse representation of
//! linear combinations of tensor-product Pauli terms
//!
//!   A = Σ_k  c_k · P_k,   P_k ∈ {I, X, Y, Z}^⊗n,  c_k ∈ ℂ
//!
//! with primitive builders (identity, Z-on-positions) and the algebraic
//! operations the encoding layers above are written in: tensor, compose,
//! add, scale and canonical reduction.
//!
//! # Quick start
//!
//! ```rust
//! use falda_op::PauliOp;
//!
//! // q = 0.5·I − 0.5·Z₀ is a 0/1-valued projector: q·q = q.
//! let id = PauliOp::identity(2);
//! let q = (&id - &PauliOp::z_on(2, [0]).unwrap()) * 0.5;
//! let squared = q.compose(&q).unwrap();
//! assert_eq!(squared.reduce(), q.reduce());
//! ```
//!
//! Operators are immutable values; every operation returns a new operator.
//! Mismatched qubit counts in `add`/`compose` are contract violations and
//! fail fast; there is no silent broadcasting.

pub mod error;
pub mod factor;
pub mod op;
pub mod term;

pub use error::{OpError, OpResult};
pub use factor::PauliFactor;
pub use op::PauliOp;
pub use term::PauliTerm;
