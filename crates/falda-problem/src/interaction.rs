//! Interaction energy tables.
//!
//! A placeholder for the residue-pair interaction model: the table is
//! consumed as opaque coefficient data by Hamiltonian assembly, indexed by
//! (residue position, side/main flag, residue position, side/main flag).

use ndarray::Array4;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A model of pairwise interaction energies between beads.
pub trait Interaction {
    /// Build the pair-energy table for a chain of `chain_len` residues.
    ///
    /// The result has shape `(chain_len + 1, 2, chain_len + 1, 2)`.
    fn calculate_energy_matrix(&mut self, chain_len: usize) -> Array4<f64>;
}

/// A random placeholder interaction.
///
/// Every entry is `−1 − 4·u` with `u` uniform in [0, 1), drawn from an
/// owned, explicitly seeded generator rather than an ambient one; a given
/// seed reproduces the table exactly.
#[derive(Debug, Clone)]
pub struct RandomInteraction {
    rng: StdRng,
}

impl RandomInteraction {
    /// Use an explicitly constructed generator.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Seed a fresh generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Interaction for RandomInteraction {
    fn calculate_energy_matrix(&mut self, chain_len: usize) -> Array4<f64> {
        let n = chain_len + 1;
        Array4::from_shape_fn((n, 2, n, 2), |_| {
            -1.0 - 4.0 * self.rng.gen_range(0.0..1.0)
        })
    }
}
