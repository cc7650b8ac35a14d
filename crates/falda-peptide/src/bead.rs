//! Bead variants of a peptide.
//!
//! A bead owns its turn-qubit pair and, when both a residue and a turn pair
//! are present, the four derived direction indicators embedded into the full
//! conformation register. Main-chain beads occupy the low register block
//! (indicator ⊗ identity); side-chain beads occupy the high block
//! (identity ⊗ indicator).

use falda_op::PauliOp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chain::SideChain;
use crate::error::PeptideResult;
use crate::residue::Residue;
use crate::turns::TurnIndicators;

/// Which chain a bead belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainKind {
    /// The main chain.
    Main,
    /// A side chain.
    Side,
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainKind::Main => write!(f, "main_chain"),
            ChainKind::Side => write!(f, "side_chain"),
        }
    }
}

/// Build the embedded indicators for a bead, if applicable.
///
/// Indicators exist exactly when the bead has both a residue and a turn-qubit
/// pair; the identity block mirrors the turn register's own width.
fn build_indicators(
    residue: Option<&Residue>,
    turn_qubits: Option<&(PauliOp, PauliOp)>,
    kind: ChainKind,
) -> PeptideResult<Option<TurnIndicators>> {
    let (Some(_), Some((q0, q1))) = (residue, turn_qubits) else {
        return Ok(None);
    };
    let base = TurnIndicators::build(q0, q1)?;
    let width = q0.num_qubits();
    let embedded = match kind {
        ChainKind::Main => base.tensor_identity_after(width),
        ChainKind::Side => base.tensor_identity_before(width),
    };
    Ok(Some(embedded))
}

/// A bead on the main chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainBead {
    main_index: usize,
    residue: Option<Residue>,
    turn_qubits: Option<(PauliOp, PauliOp)>,
    indicators: Option<TurnIndicators>,
    side_chain: Option<SideChain>,
}

impl MainBead {
    /// Construct a main-chain bead.
    ///
    /// Indicators are derived iff both `residue` and `turn_qubits` are
    /// present; the last bead of a chain passes `None` for the turn pair.
    pub fn new(
        main_index: usize,
        residue: Option<Residue>,
        turn_qubits: Option<(PauliOp, PauliOp)>,
        side_chain: Option<SideChain>,
    ) -> PeptideResult<Self> {
        let indicators =
            build_indicators(residue.as_ref(), turn_qubits.as_ref(), ChainKind::Main)?;
        Ok(Self {
            main_index,
            residue,
            turn_qubits,
            indicators,
            side_chain,
        })
    }

    /// Index of the bead on the main chain.
    pub fn main_index(&self) -> usize {
        self.main_index
    }

    /// The bead's residue, if any.
    pub fn residue(&self) -> Option<&Residue> {
        self.residue.as_ref()
    }

    /// The two turn qubits that encode the turn following this bead.
    pub fn turn_qubits(&self) -> Option<&(PauliOp, PauliOp)> {
        self.turn_qubits.as_ref()
    }

    /// The four direction indicators, when applicable.
    pub fn indicators(&self) -> Option<&TurnIndicators> {
        self.indicators.as_ref()
    }

    /// The attached side chain, if any.
    pub fn side_chain(&self) -> Option<&SideChain> {
        self.side_chain.as_ref()
    }

    /// True if a side chain attaches to this bead.
    pub fn has_side_chain(&self) -> bool {
        self.side_chain.is_some()
    }
}

impl PartialEq for MainBead {
    fn eq(&self, other: &Self) -> bool {
        self.main_index == other.main_index
    }
}

impl Eq for MainBead {}

impl Hash for MainBead {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ChainKind::Main.hash(state);
        self.main_index.hash(state);
    }
}

impl fmt::Display for MainBead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.main_index)
    }
}

/// A bead on a side chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideBead {
    main_index: usize,
    side_index: usize,
    residue: Option<Residue>,
    turn_qubits: Option<(PauliOp, PauliOp)>,
    indicators: Option<TurnIndicators>,
}

impl SideBead {
    /// Construct a side-chain bead attached at `main_index`.
    pub fn new(
        main_index: usize,
        side_index: usize,
        residue: Option<Residue>,
        turn_qubits: Option<(PauliOp, PauliOp)>,
    ) -> PeptideResult<Self> {
        let indicators =
            build_indicators(residue.as_ref(), turn_qubits.as_ref(), ChainKind::Side)?;
        Ok(Self {
            main_index,
            side_index,
            residue,
            turn_qubits,
            indicators,
        })
    }

    /// Index of the main-chain bead this side bead attaches to.
    pub fn main_index(&self) -> usize {
        self.main_index
    }

    /// Index of the bead within its side chain.
    pub fn side_index(&self) -> usize {
        self.side_index
    }

    /// The bead's residue, if any.
    pub fn residue(&self) -> Option<&Residue> {
        self.residue.as_ref()
    }

    /// The two turn qubits that encode the turn following this bead.
    pub fn turn_qubits(&self) -> Option<&(PauliOp, PauliOp)> {
        self.turn_qubits.as_ref()
    }

    /// The four direction indicators, when applicable.
    pub fn indicators(&self) -> Option<&TurnIndicators> {
        self.indicators.as_ref()
    }
}

// Two side beads are the same entity iff role, main index and side index
// all match.
impl PartialEq for SideBead {
    fn eq(&self, other: &Self) -> bool {
        self.main_index == other.main_index && self.side_index == other.side_index
    }
}

impl Eq for SideBead {}

impl Hash for SideBead {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ChainKind::Side.hash(state);
        self.main_index.hash(state);
        self.side_index.hash(state);
    }
}

impl fmt::Display for SideBead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}.{}", self.main_index, self.side_index)
    }
}

/// Either bead variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bead {
    /// A main-chain bead.
    Main(MainBead),
    /// A side-chain bead.
    Side(SideBead),
}

impl Bead {
    /// Which chain the bead belongs to.
    pub fn kind(&self) -> ChainKind {
        match self {
            Bead::Main(_) => ChainKind::Main,
            Bead::Side(_) => ChainKind::Side,
        }
    }

    /// Index of the bead (or its attachment point) on the main chain.
    pub fn main_index(&self) -> usize {
        match self {
            Bead::Main(bead) => bead.main_index(),
            Bead::Side(bead) => bead.main_index(),
        }
    }

    /// The bead's residue, if any.
    pub fn residue(&self) -> Option<&Residue> {
        match self {
            Bead::Main(bead) => bead.residue(),
            Bead::Side(bead) => bead.residue(),
        }
    }

    /// The two turn qubits that encode the turn following this bead.
    pub fn turn_qubits(&self) -> Option<&(PauliOp, PauliOp)> {
        match self {
            Bead::Main(bead) => bead.turn_qubits(),
            Bead::Side(bead) => bead.turn_qubits(),
        }
    }

    /// The four direction indicators, when applicable.
    pub fn indicators(&self) -> Option<&TurnIndicators> {
        match self {
            Bead::Main(bead) => bead.indicators(),
            Bead::Side(bead) => bead.indicators(),
        }
    }
}
