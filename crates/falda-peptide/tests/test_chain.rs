//! Tests for beads, chains and the peptide aggregate.

use falda_peptide::{
    Bead, MainBead, Peptide, PeptideError, SideBead, turn_qubit,
};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn main_chain_builds_one_bead_per_residue() {
    let peptide = Peptide::new("APRL", &[None, None, None, None]).unwrap();
    let chain = peptide.main_chain();
    assert_eq!(chain.len(), 4);
    let symbols: Vec<char> = chain
        .residue_sequence()
        .iter()
        .map(|r| r.unwrap().symbol())
        .collect();
    assert_eq!(symbols, vec!['A', 'P', 'R', 'L']);
}

#[test]
fn last_bead_has_no_turn_pair() {
    let peptide = Peptide::new("APRL", &[None, None, None, None]).unwrap();
    let chain = peptide.main_chain();
    for index in 0..3 {
        assert!(chain[index].turn_qubits().is_some(), "bead {index}");
        assert!(chain[index].indicators().is_some(), "bead {index}");
    }
    assert!(chain[3].turn_qubits().is_none());
    assert!(chain[3].indicators().is_none());
}

#[test]
fn bead_turn_qubits_sit_at_even_odd_positions() {
    let peptide = Peptide::new("APRL", &[None, None, None, None]).unwrap();
    let chain = peptide.main_chain();
    for index in 0..3 {
        let (q0, q1) = chain[index].turn_qubits().unwrap();
        assert_eq!(q0, &turn_qubit(4, 2 * index).unwrap());
        assert_eq!(q1, &turn_qubit(4, 2 * index + 1).unwrap());
    }
}

#[test]
fn side_chain_attaches_where_requested() {
    let peptide = Peptide::new("APRL", &[None, Some('G'), None, None]).unwrap();
    assert_eq!(
        peptide.side_chain_hot_vector(),
        vec![false, true, false, false]
    );
    assert!(peptide.has_side_chain_second_bead());

    let side = peptide.main_chain()[1].side_chain().unwrap();
    assert_eq!(side.len(), 1);
    assert_eq!(side[0].residue().unwrap().symbol(), 'G');
    assert_eq!(side[0].main_index(), 1);
    assert!(side[0].indicators().is_some());
}

#[test]
fn no_side_chain_second_bead_when_absent() {
    let peptide = Peptide::new("APRL", &[None, None, Some('G'), None]).unwrap();
    assert!(!peptide.has_side_chain_second_bead());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn rejects_single_bead_chain() {
    assert!(matches!(
        Peptide::new("A", &[None]),
        Err(PeptideError::ChainTooShort { len: 1 })
    ));
}

#[test]
fn rejects_side_list_of_wrong_length() {
    assert!(matches!(
        Peptide::new("APRL", &[None, None]),
        Err(PeptideError::SideChainLengthMismatch {
            expected: 4,
            got: 2
        })
    ));
}

#[test]
fn rejects_side_chain_on_first_bead() {
    assert!(matches!(
        Peptide::new("APRL", &[Some('G'), None, None, None]),
        Err(PeptideError::SideChainNotAllowed { index: 0 })
    ));
}

#[test]
fn rejects_side_chain_on_last_bead() {
    assert!(matches!(
        Peptide::new("APRL", &[None, None, None, Some('G')]),
        Err(PeptideError::SideChainNotAllowed { index: 3 })
    ));
}

#[test]
fn rejects_unknown_residue() {
    assert!(matches!(
        Peptide::new("ABRL", &[None, None, None, None]),
        Err(PeptideError::InvalidResidue { symbol: 'B' })
    ));
}

#[test]
fn rejects_unknown_side_residue() {
    assert!(matches!(
        Peptide::new("APRL", &[None, Some('J'), None, None]),
        Err(PeptideError::InvalidResidue { symbol: 'J' })
    ));
}

// ---------------------------------------------------------------------------
// Bead identity
// ---------------------------------------------------------------------------

#[test]
fn side_bead_identity_ignores_payload() {
    let turns = (turn_qubit(4, 2).unwrap(), turn_qubit(4, 3).unwrap());
    let a = SideBead::new(1, 0, None, Some(turns.clone())).unwrap();
    let b = SideBead::new(1, 0, None, None).unwrap();
    let c = SideBead::new(2, 0, None, None).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn main_bead_identity_is_its_index() {
    let a = MainBead::new(2, None, None, None).unwrap();
    let b = MainBead::new(2, None, None, None).unwrap();
    let c = MainBead::new(3, None, None, None).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn bead_enum_separates_roles() {
    let main = Bead::Main(MainBead::new(1, None, None, None).unwrap());
    let side = Bead::Side(SideBead::new(1, 0, None, None).unwrap());
    assert_ne!(main, side);
    assert_eq!(main.main_index(), side.main_index());
}

// ---------------------------------------------------------------------------
// Indicator applicability
// ---------------------------------------------------------------------------

#[test]
fn indicators_absent_without_residue() {
    let turns = (turn_qubit(4, 0).unwrap(), turn_qubit(4, 1).unwrap());
    let bead = MainBead::new(0, None, Some(turns), None).unwrap();
    assert!(bead.indicators().is_none());
}

#[test]
fn indicators_absent_without_turn_pair() {
    let residue = 'A'.try_into().ok();
    let bead = MainBead::new(0, residue, None, None).unwrap();
    assert!(bead.indicators().is_none());
}

// ---------------------------------------------------------------------------
// Embedding blocks
// ---------------------------------------------------------------------------

#[test]
fn main_and_side_indicators_occupy_disjoint_blocks() {
    let peptide = Peptide::new("APRL", &[None, Some('G'), None, None]).unwrap();
    let chain = peptide.main_chain();

    // Main bead 1: indicators on the low block of the 12-qubit register.
    let main_ind = chain[1].indicators().unwrap();
    assert_eq!(main_ind.num_qubits(), 12);
    for op in main_ind.as_array() {
        for (label, _) in op.to_labels() {
            assert!(label[6..].chars().all(|ch| ch == 'I'), "{label}");
        }
    }

    // Side bead at 1: indicators on the high block.
    let side_ind = chain[1].side_chain().unwrap()[0].indicators().unwrap();
    assert_eq!(side_ind.num_qubits(), 12);
    for op in side_ind.as_array() {
        for (label, _) in op.to_labels() {
            assert!(label[..6].chars().all(|ch| ch == 'I'), "{label}");
        }
    }
}
