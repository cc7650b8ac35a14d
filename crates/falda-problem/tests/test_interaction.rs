//! Tests for the placeholder interaction energy table.

use falda_problem::{Interaction, RandomInteraction};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn table_has_the_documented_shape() {
    let mut interaction = RandomInteraction::with_seed(7);
    let table = interaction.calculate_energy_matrix(4);
    assert_eq!(table.shape(), &[5, 2, 5, 2]);
}

#[test]
fn entries_lie_in_the_documented_band() {
    let mut interaction = RandomInteraction::with_seed(11);
    let table = interaction.calculate_energy_matrix(6);
    for &energy in table.iter() {
        assert!((-5.0..-1.0).contains(&energy), "got {energy}");
    }
}

#[test]
fn same_seed_reproduces_the_table() {
    let a = RandomInteraction::with_seed(42).calculate_energy_matrix(5);
    let b = RandomInteraction::with_seed(42).calculate_energy_matrix(5);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_tables() {
    let a = RandomInteraction::with_seed(1).calculate_energy_matrix(5);
    let b = RandomInteraction::with_seed(2).calculate_energy_matrix(5);
    assert_ne!(a, b);
}

#[test]
fn explicit_generator_matches_seed_constructor() {
    let a = RandomInteraction::new(StdRng::seed_from_u64(9)).calculate_energy_matrix(3);
    let b = RandomInteraction::with_seed(9).calculate_energy_matrix(3);
    assert_eq!(a, b);
}
