//! Static material + positional evaluation.

use crate::game::{Cell, GameState, Occupant, PieceKind, Side};

/// Positional bonuses, authored as a printed board from the owner's point of
/// view: the first row is the owner's far rank, the last row its home rank.
/// Entries are in tenths of a pawn.
pub type SquareTable = [f64; 64];

#[rustfmt::skip]
const PAWN_TABLE: SquareTable = [
    0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,
    5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0,
    1.0,  1.0,  2.0,  3.0,  3.0,  2.0,  1.0,  1.0,
    0.5,  0.5,  1.0,  2.5,  2.5,  1.0,  0.5,  0.5,
    0.0,  0.0,  0.0,  2.0,  2.0,  0.0,  0.0,  0.0,
    0.5, -0.5, -1.0,  0.0,  0.0, -1.0, -0.5,  0.5,
    0.5,  1.0,  1.0, -2.0, -2.0,  1.0,  1.0,  0.5,
    0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: SquareTable = [
    -5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0,
    -4.0, -2.0,  0.0,  0.0,  0.0,  0.0, -2.0, -4.0,
    -3.0,  0.0,  1.0,  1.5,  1.5,  1.0,  0.0, -3.0,
    -3.0,  0.5,  1.5,  2.0,  2.0,  1.5,  0.5, -3.0,
    -3.0,  0.0,  1.5,  2.0,  2.0,  1.5,  0.0, -3.0,
    -3.0,  0.5,  1.0,  1.5,  1.5,  1.0,  0.5, -3.0,
    -4.0, -2.0,  0.0,  0.5,  0.5,  0.0, -2.0, -4.0,
    -5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0,
];

#[rustfmt::skip]
const BISHOP_TABLE: SquareTable = [
    -2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0,
    -1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0,
    -1.0,  0.0,  0.5,  1.0,  1.0,  0.5,  0.0, -1.0,
    -1.0,  0.5,  0.5,  1.0,  1.0,  0.5,  0.5, -1.0,
    -1.0,  0.0,  1.0,  1.0,  1.0,  1.0,  0.0, -1.0,
    -1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0, -1.0,
    -1.0,  0.5,  0.0,  0.0,  0.0,  0.0,  0.5, -1.0,
    -2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0,
];

#[rustfmt::skip]
const ROOK_TABLE: SquareTable = [
     0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,
     0.5,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  0.5,
    -0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5,
    -0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5,
    -0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5,
    -0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5,
    -0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5,
     0.0,  0.0,  0.0,  0.5,  0.5,  0.0,  0.0,  0.0,
];

#[rustfmt::skip]
const QUEEN_TABLE: SquareTable = [
    -2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0,
    -1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0,
    -1.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0,
    -0.5,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5,
     0.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5,
    -1.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0,
    -1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0,
    -2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0,
];

/// Material weights and positional bonuses for each piece kind.
///
/// The king carries no material (it is never captured) and no positional
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationTable {
    /// Indexed by [`PieceKind::idx`].
    pub material: [f64; 6],
    /// Indexed by [`PieceKind::idx`]; `None` means no positional term.
    pub positional: [Option<SquareTable>; 6],
    /// Converts table entries into pawn units.
    pub positional_scale: f64,
}

impl EvaluationTable {
    pub const STANDARD: EvaluationTable = EvaluationTable {
        material: [1.0, 3.2, 3.33, 5.0, 9.0, 0.0],
        positional: [
            Some(PAWN_TABLE),
            Some(KNIGHT_TABLE),
            Some(BISHOP_TABLE),
            Some(ROOK_TABLE),
            Some(QUEEN_TABLE),
            None,
        ],
        positional_scale: 0.1,
    };

    #[inline]
    pub fn material_weight(&self, kind: PieceKind) -> f64 {
        self.material[kind.idx()]
    }

    /// Bonus for a `side` piece of `kind` standing on `cell`.
    pub fn positional_bonus(&self, kind: PieceKind, side: Side, cell: Cell) -> f64 {
        let Some(table) = &self.positional[kind.idx()] else {
            return 0.0;
        };
        // Row 0 of a table is the owner's far rank.
        let idx = match side {
            Side::White => cell.flip_rank().index(),
            Side::Black => cell.index(),
        };
        table[idx] * self.positional_scale
    }

    /// Signed contribution of one occupant, positive for the positive side.
    #[inline]
    pub fn contribution(&self, occupant: &Occupant) -> f64 {
        let value = self.material_weight(occupant.kind)
            + self.positional_bonus(occupant.kind, occupant.side, occupant.cell);
        occupant.side.sign() * value
    }
}

impl Default for EvaluationTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Process-wide standard table.
pub static STANDARD_TABLE: EvaluationTable = EvaluationTable::STANDARD;

/// Maps a position to a score from the positive side's perspective.
///
/// Implementations must be pure: the same position always scores the same.
pub trait Evaluator<G: GameState> {
    fn evaluate(&self, position: &G) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    G: GameState,
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, position: &G) -> f64 {
        self(position)
    }
}

/// Material plus piece-square evaluation over an [`EvaluationTable`].
#[derive(Debug, Clone, Copy)]
pub struct MaterialEvaluator {
    table: &'static EvaluationTable,
}

impl MaterialEvaluator {
    pub const fn new(table: &'static EvaluationTable) -> Self {
        Self { table }
    }
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self::new(&STANDARD_TABLE)
    }
}

impl<G: GameState> Evaluator<G> for MaterialEvaluator {
    fn evaluate(&self, position: &G) -> f64 {
        position
            .occupants()
            .map(|occ| self.table.contribution(&occ))
            .sum()
    }
}

/// Evaluates `position` with the standard table.
///
/// Terminal positions are scored like any other; deciding what a mate or a
/// stalemate is worth belongs to the caller.
pub fn evaluate<G: GameState>(position: &G) -> f64 {
    MaterialEvaluator::default().evaluate(position)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
