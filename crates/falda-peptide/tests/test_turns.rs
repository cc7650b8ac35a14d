//! Tests for turn qubits and direction indicators.

use falda_op::PauliOp;
use falda_peptide::{PeptideError, TurnIndicators, turn_qubit};

// ---------------------------------------------------------------------------
// turn_qubit
// ---------------------------------------------------------------------------

#[test]
fn turn_qubit_matches_reference_form() {
    // A 4-bead chain needs 6 turn qubits.
    let q = turn_qubit(4, 0).unwrap();
    assert_eq!(q.num_qubits(), 6);

    let want = (&PauliOp::identity(6) - &PauliOp::z_on(6, [0]).unwrap()) * 0.5;
    assert_eq!(q.reduce(), want.reduce());
}

#[test]
fn turn_qubit_is_idempotent() {
    for index in 0..6 {
        let q = turn_qubit(4, index).unwrap();
        let squared = q.compose(&q).unwrap().reduce();
        assert_eq!(squared, q.reduce(), "index {index}");
    }
}

#[test]
fn turn_qubit_rejects_short_chains() {
    assert!(matches!(
        turn_qubit(1, 0),
        Err(PeptideError::ChainTooShort { len: 1 })
    ));
}

#[test]
fn turn_qubit_rejects_out_of_range_index() {
    // chain_len 3 → 4 turn qubits, so index 4 is out of range.
    assert!(matches!(
        turn_qubit(3, 4),
        Err(PeptideError::Op(_))
    ));
}

// ---------------------------------------------------------------------------
// TurnIndicators
// ---------------------------------------------------------------------------

fn pair(chain_len: usize, bead: usize) -> (PauliOp, PauliOp) {
    (
        turn_qubit(chain_len, 2 * bead).unwrap(),
        turn_qubit(chain_len, 2 * bead + 1).unwrap(),
    )
}

#[test]
fn indicators_sum_to_identity() {
    let (q0, q1) = pair(4, 0);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    let [a, b, c, d] = ind.as_array();
    let sum = (&(a + b) + &(c + d)).reduce();
    assert_eq!(sum, PauliOp::identity(q0.num_qubits()).reduce());
}

#[test]
fn indicators_are_pairwise_orthogonal() {
    let (q0, q1) = pair(4, 1);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    for i in 0..4 {
        for j in 0..4 {
            if i == j {
                continue;
            }
            let product = ind[i].compose(&ind[j]).unwrap().reduce();
            assert!(product.is_zero(), "ind{i}·ind{j} should vanish");
        }
    }
}

#[test]
fn indicators_are_idempotent() {
    let (q0, q1) = pair(3, 0);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    for i in 0..4 {
        let squared = ind[i].compose(&ind[i]).unwrap().reduce();
        assert_eq!(squared, ind[i].reduce(), "ind{i} should be a projector");
    }
}

#[test]
fn reference_formulas_agree_with_naive_projector_forms() {
    // ind1 = q1·(q1−q0) must equal (I−q0)·q1, and symmetrically for ind2;
    // the projector identities force agreement, asserted here rather than
    // assumed.
    let (q0, q1) = pair(4, 0);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    let identity = PauliOp::identity(q0.num_qubits());

    let naive1 = (&identity - &q0).compose(&q1).unwrap().reduce();
    assert_eq!(ind[1], naive1);

    let naive2 = q0.compose(&(&identity - &q1)).unwrap().reduce();
    assert_eq!(ind[2], naive2);
}

#[test]
fn build_rejects_register_mismatch() {
    let q0 = turn_qubit(4, 0).unwrap();
    let q1 = turn_qubit(3, 0).unwrap();
    assert!(matches!(
        TurnIndicators::build(&q0, &q1),
        Err(PeptideError::TurnRegisterMismatch { left: 6, right: 4 })
    ));
}

// ---------------------------------------------------------------------------
// Embedding
// ---------------------------------------------------------------------------

#[test]
fn embedding_after_keeps_low_positions() {
    let (q0, q1) = pair(3, 0);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    let wide = ind.tensor_identity_after(4);
    assert_eq!(wide.num_qubits(), 8);
    for op in wide.as_array() {
        for (label, _) in op.to_labels() {
            assert!(
                label[4..].chars().all(|ch| ch == 'I'),
                "high block should stay identity, got {label}"
            );
        }
    }
}

#[test]
fn embedding_before_moves_to_high_positions() {
    let (q0, q1) = pair(3, 0);
    let ind = TurnIndicators::build(&q0, &q1).unwrap();
    let wide = ind.tensor_identity_before(4);
    assert_eq!(wide.num_qubits(), 8);
    for op in wide.as_array() {
        for (label, _) in op.to_labels() {
            assert!(
                label[..4].chars().all(|ch| ch == 'I'),
                "low block should stay identity, got {label}"
            );
        }
    }
}

#[test]
fn embedded_indicators_still_sum_to_identity() {
    let (q0, q1) = pair(3, 1);
    let wide = TurnIndicators::build(&q0, &q1)
        .unwrap()
        .tensor_identity_after(q0.num_qubits());
    let [a, b, c, d] = wide.as_array();
    let sum = (&(a + b) + &(c + d)).reduce();
    assert_eq!(sum, PauliOp::identity(8).reduce());
}
