//! UCI move text and `position` command handling.
//!
//! cozy-chess encodes castling as "king captures own rook"; UCI wants the
//! king's two-square step. These helpers translate in both directions.

use cozy_chess::{File, Move, Piece, Square};
use minimax_core::GameState;

use crate::position::{ChessError, ChessPosition};

/// UCI text for a legal move of `pos`.
pub fn move_to_uci(pos: &ChessPosition, mv: Move) -> String {
    standard_castle(pos, mv).to_string()
}

fn standard_castle(pos: &ChessPosition, mv: Move) -> Move {
    let board = pos.board();
    let own = board.colors(board.side_to_move());
    if board.piece_on(mv.from) == Some(Piece::King) && own.has(mv.to) {
        let file = if mv.to.file() as u8 > mv.from.file() as u8 {
            File::G
        } else {
            File::C
        };
        return Move {
            from: mv.from,
            to: Square::new(file, mv.from.rank()),
            promotion: None,
        };
    }
    mv
}

/// Matches UCI text against the legal moves of `pos`.
pub fn parse_uci_move(pos: &ChessPosition, txt: &str) -> Result<Move, ChessError> {
    let wanted: Move = txt
        .parse()
        .map_err(|_| ChessError::BadMove(txt.to_string()))?;
    pos.legal_moves()
        .into_iter()
        .find(|&mv| mv == wanted || standard_castle(pos, mv) == wanted)
        .ok_or_else(|| ChessError::IllegalMove {
            mv: txt.to_string(),
            fen: pos.fen(),
        })
}

/// Applies the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <six fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<ChessPosition, ChessError> {
    let (mut pos, rest) = match args {
        ["fen", rest @ ..] => {
            let end = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            (ChessPosition::from_fen(&rest[..end].join(" "))?, &rest[end..])
        }
        ["startpos", rest @ ..] => (ChessPosition::startpos(), rest),
        rest => (ChessPosition::startpos(), rest),
    };

    if let ["moves", moves @ ..] = rest {
        for txt in moves {
            let mv = parse_uci_move(&pos, txt)?;
            pos.make_move(&mv)?;
        }
    }
    Ok(pos)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
