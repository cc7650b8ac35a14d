//! Tensor-product Pauli terms.
//!
//! A term is one factor assignment P = P₀ ⊗ P₁ ⊗ … ⊗ P_{n−1} with a complex
//! coefficient. The factor vector is stored as two parallel boolean vectors:
//! a z flag and an x flag per qubit, with Y represented by both flags set.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OpError, OpResult};
use crate::factor::PauliFactor;

pub(crate) const C_ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const C_ONE: Complex64 = Complex64::new(1.0, 0.0);

/// One tensor-product Pauli term with a complex coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// z flag per qubit.
    z: Vec<bool>,
    /// x flag per qubit.
    x: Vec<bool>,
    /// Complex coefficient.
    coeff: Complex64,
}

impl PauliTerm {
    /// Create a term from its flag vectors and coefficient.
    pub fn new(z: Vec<bool>, x: Vec<bool>, coeff: Complex64) -> OpResult<Self> {
        if z.len() != x.len() {
            return Err(OpError::FlagLengthMismatch {
                z_len: z.len(),
                x_len: x.len(),
            });
        }
        Ok(Self { z, x, coeff })
    }

    /// Invariant upheld by callers: `z.len() == x.len()`.
    pub(crate) fn from_parts_unchecked(z: Vec<bool>, x: Vec<bool>, coeff: Complex64) -> Self {
        debug_assert_eq!(z.len(), x.len());
        Self { z, x, coeff }
    }

    /// The all-identity term of a given width with coefficient 1.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            z: vec![false; num_qubits],
            x: vec![false; num_qubits],
            coeff: C_ONE,
        }
    }

    /// Parse a term from a factor-label string; qubit 0 is the leftmost
    /// character.
    pub fn from_label(label: &str, coeff: Complex64) -> OpResult<Self> {
        let mut z = Vec::with_capacity(label.len());
        let mut x = Vec::with_capacity(label.len());
        for symbol in label.chars() {
            let factor =
                PauliFactor::from_label(symbol).ok_or(OpError::InvalidLabel { symbol })?;
            let (fz, fx) = factor.flags();
            z.push(fz);
            x.push(fx);
        }
        Ok(Self { z, x, coeff })
    }

    /// Number of qubits the term spans.
    pub fn num_qubits(&self) -> usize {
        self.z.len()
    }

    /// The complex coefficient.
    pub fn coeff(&self) -> Complex64 {
        self.coeff
    }

    /// The z flag vector.
    pub fn z_flags(&self) -> &[bool] {
        &self.z
    }

    /// The x flag vector.
    pub fn x_flags(&self) -> &[bool] {
        &self.x
    }

    /// The factor at one qubit position.
    pub fn factor(&self, position: usize) -> OpResult<PauliFactor> {
        if position >= self.num_qubits() {
            return Err(OpError::PositionOutOfRange {
                position,
                num_qubits: self.num_qubits(),
            });
        }
        Ok(PauliFactor::from_flags(self.z[position], self.x[position]))
    }

    /// The factor-label string; qubit 0 is the leftmost character.
    pub fn label(&self) -> String {
        self.z
            .iter()
            .zip(&self.x)
            .map(|(&z, &x)| PauliFactor::from_flags(z, x).label())
            .collect()
    }

    /// A copy of this term with the z flag at `position` set to `value`.
    ///
    /// Positions beyond the term's width are ignored; the x flag and the
    /// coefficient are untouched.
    #[must_use]
    pub fn with_z_flag(&self, position: usize, value: bool) -> Self {
        let mut z = self.z.clone();
        if let Some(flag) = z.get_mut(position) {
            *flag = value;
        }
        Self {
            z,
            x: self.x.clone(),
            coeff: self.coeff,
        }
    }

    /// A copy of this term with the coefficient multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: Complex64) -> Self {
        Self {
            z: self.z.clone(),
            x: self.x.clone(),
            coeff: self.coeff * factor,
        }
    }

    /// Tensor combination: `self` keeps qubits `0..n`, `other` is appended at
    /// `n..n+m`; coefficients multiply.
    #[must_use]
    pub fn tensor(&self, other: &Self) -> Self {
        let mut z = Vec::with_capacity(self.z.len() + other.z.len());
        z.extend_from_slice(&self.z);
        z.extend_from_slice(&other.z);
        let mut x = Vec::with_capacity(self.x.len() + other.x.len());
        x.extend_from_slice(&self.x);
        x.extend_from_slice(&other.x);
        Self {
            z,
            x,
            coeff: self.coeff * other.coeff,
        }
    }

    /// Term product `self · other` with exact phase tracking.
    ///
    /// Per qubit the standard single-Pauli multiplication table applies
    /// (I·P = P, P·P = I, X·Y = iZ cyclically); the accumulated power of i
    /// multiplies into the coefficient.
    pub fn compose(&self, other: &Self) -> OpResult<Self> {
        if self.num_qubits() != other.num_qubits() {
            return Err(OpError::QubitCountMismatch {
                expected: self.num_qubits(),
                got: other.num_qubits(),
            });
        }
        let mut z = Vec::with_capacity(self.z.len());
        let mut x = Vec::with_capacity(self.x.len());
        let mut phase: u8 = 0;
        for i in 0..self.z.len() {
            let (fz, fx, k) = factor_product(self.z[i], self.x[i], other.z[i], other.x[i]);
            z.push(fz);
            x.push(fx);
            phase = (phase + k) % 4;
        }
        Ok(Self {
            z,
            x,
            coeff: self.coeff * other.coeff * i_power(phase),
        })
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.coeff, self.label())
    }
}

/// Multiply two single-qubit factors given as (z, x) flag pairs.
///
/// Writing each factor as i^ε · X^x Z^z (ε = 1 exactly for Y), the product
/// X^{x1}Z^{z1} · X^{x2}Z^{z2} reorders to (−1)^{z1·x2} X^{x1⊕x2} Z^{z1⊕z2},
/// so the resulting power of i is ε1 + ε2 − ε3 + 2·(z1·x2)  (mod 4), where
/// ε3 belongs to the product factor.
fn factor_product(z1: bool, x1: bool, z2: bool, x2: bool) -> (bool, bool, u8) {
    let z3 = z1 ^ z2;
    let x3 = x1 ^ x2;
    let e1 = u8::from(z1 && x1);
    let e2 = u8::from(z2 && x2);
    let e3 = u8::from(z3 && x3);
    let anticommute = 2 * u8::from(z1 && x2);
    let phase = (e1 + e2 + anticommute + 4 - e3) % 4;
    (z3, x3, phase)
}

/// i^k for k in 0..4.
fn i_power(k: u8) -> Complex64 {
    match k % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, 1.0),
        2 => Complex64::new(-1.0, 0.0),
        _ => Complex64::new(0.0, -1.0),
    }
}
