//! `GameState` over the cozy-chess rules engine.

use cozy_chess::{Board, Color, GameStatus, Move, Piece, Square};
use minimax_core::{Cell, GameState, Occupant, PieceKind, Side};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid FEN {fen:?}: {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: cozy_chess::FenParseError,
    },
    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },
    #[error("cannot parse move {0:?}")]
    BadMove(String),
    #[error("no move to undo")]
    NothingToUndo,
}

/// A chess position plus the boards that led to it.
///
/// The history doubles as the undo stack and as the record used for
/// threefold repetition.
#[derive(Debug, Clone)]
pub struct ChessPosition {
    board: Board,
    history: Vec<Board>,
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::startpos()
    }
}

impl From<Board> for ChessPosition {
    fn from(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }
}

impl ChessPosition {
    pub fn startpos() -> Self {
        Board::default().into()
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let board = Board::from_fen(fen, false).map_err(|source| ChessError::InvalidFen {
            fen: fen.to_string(),
            source,
        })?;
        Ok(board.into())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves that can still be undone.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// The position has occurred at least twice before.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        // Reversible moves only; a capture or pawn move resets the clock.
        let window = self.board.halfmove_clock() as usize;
        let repeats = self
            .history
            .iter()
            .rev()
            .take(window)
            .filter(|b| b.hash() == key)
            .count();
        repeats >= 2
    }
}

pub(crate) fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

pub(crate) fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

#[inline]
pub(crate) fn cell_of(sq: Square) -> Option<Cell> {
    Cell::new(sq as u8)
}

impl GameState for ChessPosition {
    type Move = Move;
    type Error = ChessError;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn make_move(&mut self, mv: &Move) -> Result<(), ChessError> {
        let mut next = self.board.clone();
        next.try_play(*mv).map_err(|_| ChessError::IllegalMove {
            mv: mv.to_string(),
            fen: self.fen(),
        })?;
        self.history.push(std::mem::replace(&mut self.board, next));
        Ok(())
    }

    fn unmake_move(&mut self) -> Result<(), ChessError> {
        self.board = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.board.status() != GameStatus::Ongoing || self.is_threefold_repetition()
    }

    fn side_to_move(&self) -> Side {
        side_of(self.board.side_to_move())
    }

    fn occupants(&self) -> impl Iterator<Item = Occupant> + '_ {
        let board = &self.board;
        board.occupied().into_iter().filter_map(move |sq| {
            Some(Occupant {
                cell: cell_of(sq)?,
                kind: kind_of(board.piece_on(sq)?),
                side: side_of(board.color_on(sq)?),
            })
        })
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
