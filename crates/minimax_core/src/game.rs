//! The capability interface a rules engine provides to the search.
//!
//! The search never looks inside a position or a move. Everything it needs
//! goes through [`GameState`], so any conformant rules engine (chess, a
//! different board size, a synthetic test tree) can be searched unchanged.

use std::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The side whose material counts positively in evaluation.
    pub const POSITIVE: Side = Side::White;

    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// +1.0 for the positive side, -1.0 for the other.
    #[inline]
    pub fn sign(self) -> f64 {
        if self == Side::POSITIVE { 1.0 } else { -1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }
}

/// One of the 64 board cells, `0 = a1`, `7 = h1`, `63 = h8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Returns `None` if `index` is off the board.
    pub fn new(index: u8) -> Option<Cell> {
        (index < 64).then_some(Cell(index))
    }

    pub fn from_file_rank(file: u8, rank: u8) -> Option<Cell> {
        (file < 8 && rank < 8).then(|| Cell(rank * 8 + file))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The same file on the opposite rank (a1 <-> a8).
    #[inline]
    pub fn flip_rank(self) -> Cell {
        Cell(self.0 ^ 56)
    }
}

/// A piece standing on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub cell: Cell,
    pub kind: PieceKind,
    pub side: Side,
}

/// A mutable game position as seen by the search.
///
/// `make_move` followed by `unmake_move` must restore the position exactly;
/// the search relies on this to walk the tree in place.
pub trait GameState {
    /// A move produced by [`GameState::legal_moves`]. The search only ever
    /// selects among these, it never builds one itself.
    type Move: Clone + PartialEq + Debug;

    /// Failure surfaced by the rules engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Legal moves in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies `mv` in place.
    fn make_move(&mut self, mv: &Self::Move) -> Result<(), Self::Error>;

    /// Reverses the most recent successful `make_move`.
    fn unmake_move(&mut self) -> Result<(), Self::Error>;

    /// Game over: checkmate, stalemate or any other draw the rules engine
    /// recognises.
    fn is_terminal(&self) -> bool;

    fn side_to_move(&self) -> Side;

    /// Every occupied cell with its piece.
    fn occupants(&self) -> impl Iterator<Item = Occupant> + '_;
}
