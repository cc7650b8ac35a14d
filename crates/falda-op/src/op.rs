//! Sparse symbolic Pauli-sum operators.
//!
//! An operator is a linear combination of tensor-product Pauli terms over a
//! fixed qubit count:
//!
//!   A = Σ_k  c_k · P_k
//!
//! where each P_k is a factor assignment over {I, X, Y, Z} and c_k ∈ ℂ.
//! Operators are immutable values: every algebraic operation returns a new
//! operator. The canonical form produced by [`PauliOp::reduce`] carries no
//! duplicate factor vectors, no exactly-zero coefficients, and a term order
//! that is independent of construction order.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{OpError, OpResult};
use crate::term::{C_ONE, C_ZERO, PauliTerm};

/// A sparse linear combination of tensor-product Pauli terms.
///
/// All terms share one qubit count. The empty term list is the zero operator
/// of that width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliOp {
    num_qubits: usize,
    terms: Vec<PauliTerm>,
}

impl PauliOp {
    /// The identity operator: one all-I term with coefficient 1.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            terms: vec![PauliTerm::identity(num_qubits)],
        }
    }

    /// The zero operator of a given width (no terms).
    pub fn zero(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            terms: Vec::new(),
        }
    }

    /// A single-term operator with a Z factor at each listed position and I
    /// elsewhere, coefficient 1.
    pub fn z_on(num_qubits: usize, positions: impl IntoIterator<Item = usize>) -> OpResult<Self> {
        let mut z = vec![false; num_qubits];
        for position in positions {
            if position >= num_qubits {
                return Err(OpError::PositionOutOfRange {
                    position,
                    num_qubits,
                });
            }
            z[position] = true;
        }
        let term = PauliTerm::new(z, vec![false; num_qubits], C_ONE)?;
        Ok(Self {
            num_qubits,
            terms: vec![term],
        })
    }

    /// Build an operator from a term list; every term must span `num_qubits`.
    pub fn from_terms(num_qubits: usize, terms: Vec<PauliTerm>) -> OpResult<Self> {
        for term in &terms {
            if term.num_qubits() != num_qubits {
                return Err(OpError::QubitCountMismatch {
                    expected: num_qubits,
                    got: term.num_qubits(),
                });
            }
        }
        Ok(Self { num_qubits, terms })
    }

    /// Number of qubits the operator acts on.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// All terms, in stored order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    ///
    /// Call [`PauliOp::reduce`] first to detect sums that cancel to zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Kronecker-style combination: `self` keeps qubits `0..n`, `other`
    /// occupies `n..n+m`. The term set is the cross product of both term
    /// lists with coefficients multiplied.
    #[must_use]
    pub fn tensor(&self, other: &Self) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.tensor(b));
            }
        }
        Self {
            num_qubits: self.num_qubits + other.num_qubits,
            terms,
        }
    }

    /// Operator product `self · other`.
    ///
    /// Term-wise factor composition with exact i-power phase tracking.
    /// Fails on qubit-count mismatch; there is no broadcasting.
    pub fn compose(&self, other: &Self) -> OpResult<Self> {
        if self.num_qubits != other.num_qubits {
            return Err(OpError::QubitCountMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for a in &self.terms {
            for b in &other.terms {
                terms.push(a.compose(b)?);
            }
        }
        Ok(Self {
            num_qubits: self.num_qubits,
            terms,
        })
    }

    /// Operator sum; both operands must share the qubit count.
    pub fn checked_add(&self, other: &Self) -> OpResult<Self> {
        if self.num_qubits != other.num_qubits {
            return Err(OpError::QubitCountMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Ok(Self {
            num_qubits: self.num_qubits,
            terms,
        })
    }

    /// Operator difference; both operands must share the qubit count.
    pub fn checked_sub(&self, other: &Self) -> OpResult<Self> {
        self.checked_add(&other.scale(Complex64::new(-1.0, 0.0)))
    }

    /// A copy with every coefficient multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Complex64) -> Self {
        Self {
            num_qubits: self.num_qubits,
            terms: self.terms.iter().map(|t| t.scaled(factor)).collect(),
        }
    }

    /// Canonical form: merge terms with identical factor vectors by summing
    /// coefficients, drop terms whose coefficient is exactly zero, and sort
    /// terms by factor vector.
    ///
    /// The sort makes the result independent of construction order, so
    /// operators assembled in any term order reduce identically.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let mut merged: FxHashMap<(Vec<bool>, Vec<bool>), Complex64> = FxHashMap::default();
        for term in &self.terms {
            let key = (term.z_flags().to_vec(), term.x_flags().to_vec());
            *merged.entry(key).or_insert(C_ZERO) += term.coeff();
        }
        let mut terms: Vec<PauliTerm> = merged
            .into_iter()
            .filter(|&(_, coeff)| coeff != C_ZERO)
            .map(|((z, x), coeff)| PauliTerm::from_parts_unchecked(z, x, coeff))
            .collect();
        terms.sort_by(|a, b| {
            a.z_flags()
                .cmp(b.z_flags())
                .then_with(|| a.x_flags().cmp(b.x_flags()))
        });
        Self {
            num_qubits: self.num_qubits,
            terms,
        }
    }

    /// The (label, coefficient) pairs of all terms; qubit 0 is the leftmost
    /// label character. This is the interchange form of the operator.
    pub fn to_labels(&self) -> Vec<(String, Complex64)> {
        self.terms.iter().map(|t| (t.label(), t.coeff())).collect()
    }

    /// Build an operator from (label, coefficient) pairs; all labels must
    /// share one length.
    pub fn from_labels(pairs: &[(&str, Complex64)]) -> OpResult<Self> {
        let Some(&(first, _)) = pairs.first() else {
            return Err(OpError::NoTerms);
        };
        let num_qubits = first.chars().count();
        let mut terms = Vec::with_capacity(pairs.len());
        for &(label, coeff) in pairs {
            let got = label.chars().count();
            if got != num_qubits {
                return Err(OpError::LabelLengthMismatch {
                    expected: num_qubits,
                    got,
                });
            }
            terms.push(PauliTerm::from_label(label, coeff)?);
        }
        Ok(Self { num_qubits, terms })
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 ({} qubits)", self.num_qubits);
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Operator sugar
//
// The overloaded forms panic on qubit-count mismatch; the checked_* methods
// are the fallible forms.
// ---------------------------------------------------------------------------

impl Add for &PauliOp {
    type Output = PauliOp;

    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn add(self, rhs: &PauliOp) -> PauliOp {
        match self.checked_add(rhs) {
            Ok(op) => op,
            Err(e) => panic!("operator addition failed: {e}"),
        }
    }
}

impl Add for PauliOp {
    type Output = PauliOp;

    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn add(self, rhs: PauliOp) -> PauliOp {
        &self + &rhs
    }
}

impl Sub for &PauliOp {
    type Output = PauliOp;

    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn sub(self, rhs: &PauliOp) -> PauliOp {
        match self.checked_sub(rhs) {
            Ok(op) => op,
            Err(e) => panic!("operator subtraction failed: {e}"),
        }
    }
}

impl Sub for PauliOp {
    type Output = PauliOp;

    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn sub(self, rhs: PauliOp) -> PauliOp {
        &self - &rhs
    }
}

impl Mul for &PauliOp {
    type Output = PauliOp;

    /// Operator composition.
    ///
    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn mul(self, rhs: &PauliOp) -> PauliOp {
        match self.compose(rhs) {
            Ok(op) => op,
            Err(e) => panic!("operator composition failed: {e}"),
        }
    }
}

impl Mul for PauliOp {
    type Output = PauliOp;

    /// Operator composition.
    ///
    /// # Panics
    /// Panics if the operands differ in qubit count.
    fn mul(self, rhs: PauliOp) -> PauliOp {
        &self * &rhs
    }
}

impl Mul<f64> for &PauliOp {
    type Output = PauliOp;

    fn mul(self, rhs: f64) -> PauliOp {
        self.scale(Complex64::new(rhs, 0.0))
    }
}

impl Mul<f64> for PauliOp {
    type Output = PauliOp;

    fn mul(self, rhs: f64) -> PauliOp {
        &self * rhs
    }
}

impl Mul<&PauliOp> for f64 {
    type Output = PauliOp;

    fn mul(self, rhs: &PauliOp) -> PauliOp {
        rhs.scale(Complex64::new(self, 0.0))
    }
}

impl Mul<PauliOp> for f64 {
    type Output = PauliOp;

    fn mul(self, rhs: PauliOp) -> PauliOp {
        self * &rhs
    }
}

impl Mul<Complex64> for &PauliOp {
    type Output = PauliOp;

    fn mul(self, rhs: Complex64) -> PauliOp {
        self.scale(rhs)
    }
}

impl Mul<Complex64> for PauliOp {
    type Output = PauliOp;

    fn mul(self, rhs: Complex64) -> PauliOp {
        self.scale(rhs)
    }
}

impl Neg for &PauliOp {
    type Output = PauliOp;

    fn neg(self) -> PauliOp {
        self.scale(Complex64::new(-1.0, 0.0))
    }
}

impl Neg for PauliOp {
    type Output = PauliOp;

    fn neg(self) -> PauliOp {
        -&self
    }
}
