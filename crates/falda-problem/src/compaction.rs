//! Register compaction: dropping qubits no term uses.
//!
//! A qubit position is unused iff its diagonal (z) flag is false in every
//! term. Off-diagonal (x) usage alone does not count as used: an operator
//! acting only off-diagonally at some position has that position removed,
//! off-diagonal factors included.

use falda_op::{PauliOp, PauliTerm};
use tracing::debug;

/// Remove every qubit position that is unused by all terms.
///
/// Returns the compacted operator (term vectors projected onto the kept
/// positions, term count and coefficients unchanged) and the removed
/// original indices in ascending order. Recompacting a compact operator
/// yields the same operator and an empty removal list.
pub fn remove_unused_qubits(operator: &PauliOp) -> (PauliOp, Vec<usize>) {
    let num_qubits = operator.num_qubits();
    let mut used = vec![false; num_qubits];
    for term in operator.terms() {
        for (position, &z) in term.z_flags().iter().enumerate() {
            if z {
                used[position] = true;
            }
        }
    }
    let removed: Vec<usize> = (0..num_qubits).filter(|&p| !used[p]).collect();
    if removed.is_empty() {
        return (operator.clone(), removed);
    }
    debug!(
        num_qubits,
        n_removed = removed.len(),
        ?removed,
        "compacting unused qubits"
    );

    let terms: Vec<PauliTerm> = operator
        .terms()
        .iter()
        .map(|term| {
            let z: Vec<bool> = project(term.z_flags(), &used);
            let x: Vec<bool> = project(term.x_flags(), &used);
            PauliTerm::new(z, x, term.coeff()).expect("projection keeps z and x aligned")
        })
        .collect();
    let compact = PauliOp::from_terms(num_qubits - removed.len(), terms)
        .expect("projection preserves term widths");
    (compact, removed)
}

/// Keep the flags at positions marked used.
fn project(flags: &[bool], used: &[bool]) -> Vec<bool> {
    flags
        .iter()
        .zip(used)
        .filter_map(|(&flag, &keep)| keep.then_some(flag))
        .collect()
}
