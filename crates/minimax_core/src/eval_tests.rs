use super::*;
use crate::game::Occupant;

/// A frozen arrangement of pieces with no moves.
#[derive(Debug, Clone, Default)]
struct Placement {
    pieces: Vec<Occupant>,
}

#[derive(Debug, thiserror::Error)]
#[error("placement has no moves")]
struct NoMoves;

impl Placement {
    fn with(mut self, side: Side, kind: PieceKind, file: u8, rank: u8) -> Self {
        let cell = Cell::from_file_rank(file, rank).expect("on board");
        self.pieces.push(Occupant { cell, kind, side });
        self
    }

    fn mirrored(&self) -> Self {
        Placement {
            pieces: self
                .pieces
                .iter()
                .map(|o| Occupant {
                    cell: o.cell.flip_rank(),
                    kind: o.kind,
                    side: o.side.other(),
                })
                .collect(),
        }
    }
}

impl GameState for Placement {
    type Move = ();
    type Error = NoMoves;

    fn legal_moves(&self) -> Vec<()> {
        Vec::new()
    }
    fn make_move(&mut self, _mv: &()) -> Result<(), NoMoves> {
        Err(NoMoves)
    }
    fn unmake_move(&mut self) -> Result<(), NoMoves> {
        Err(NoMoves)
    }
    fn is_terminal(&self) -> bool {
        true
    }
    fn side_to_move(&self) -> Side {
        Side::White
    }
    fn occupants(&self) -> impl Iterator<Item = Occupant> + '_ {
        self.pieces.iter().copied()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_board_is_zero() {
    assert_eq!(evaluate(&Placement::default()), 0.0);
}

#[test]
fn kings_contribute_nothing() {
    let pos = Placement::default()
        .with(Side::White, PieceKind::King, 4, 0)
        .with(Side::Black, PieceKind::King, 0, 7);
    assert_eq!(evaluate(&pos), 0.0);
}

#[test]
fn material_weights() {
    let t = &STANDARD_TABLE;
    assert_eq!(t.material_weight(PieceKind::Pawn), 1.0);
    assert_eq!(t.material_weight(PieceKind::Knight), 3.2);
    assert_eq!(t.material_weight(PieceKind::Bishop), 3.33);
    assert_eq!(t.material_weight(PieceKind::Rook), 5.0);
    assert_eq!(t.material_weight(PieceKind::Queen), 9.0);
    assert_eq!(t.material_weight(PieceKind::King), 0.0);
}

#[test]
fn white_pawn_on_e2_is_discouraged() {
    // e2 sits on the -2.0 entry of the home-rank-adjacent row.
    let pos = Placement::default().with(Side::White, PieceKind::Pawn, 4, 1);
    assert_close(evaluate(&pos), 0.8);
}

#[test]
fn black_pawn_uses_its_own_perspective() {
    let pos = Placement::default().with(Side::Black, PieceKind::Pawn, 4, 6);
    assert_close(evaluate(&pos), -0.8);
}

#[test]
fn centralised_knight_gets_bonus() {
    let d4 = Placement::default().with(Side::White, PieceKind::Knight, 3, 3);
    let a1 = Placement::default().with(Side::White, PieceKind::Knight, 0, 0);
    assert_close(evaluate(&d4), 3.4);
    assert_close(evaluate(&a1), 2.7);
}

#[test]
fn pawn_about_to_promote() {
    let pos = Placement::default().with(Side::White, PieceKind::Pawn, 0, 6);
    assert_close(evaluate(&pos), 1.5);
}

#[test]
fn mirrored_position_negates_score() {
    let pos = Placement::default()
        .with(Side::White, PieceKind::King, 6, 0)
        .with(Side::White, PieceKind::Queen, 3, 0)
        .with(Side::White, PieceKind::Rook, 0, 0)
        .with(Side::White, PieceKind::Bishop, 2, 3)
        .with(Side::White, PieceKind::Knight, 5, 2)
        .with(Side::White, PieceKind::Pawn, 4, 3)
        .with(Side::White, PieceKind::Pawn, 7, 1)
        .with(Side::Black, PieceKind::King, 4, 7)
        .with(Side::Black, PieceKind::Rook, 3, 6)
        .with(Side::Black, PieceKind::Knight, 1, 7)
        .with(Side::Black, PieceKind::Pawn, 2, 4);

    let score = evaluate(&pos);
    assert!(score != 0.0);
    assert_close(evaluate(&pos.mirrored()), -score);
}

#[test]
fn custom_table_changes_weights() {
    static PAWNS_ONLY: EvaluationTable = EvaluationTable {
        material: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        positional: [None, None, None, None, None, None],
        positional_scale: 0.0,
    };
    let pos = Placement::default()
        .with(Side::White, PieceKind::Queen, 3, 3)
        .with(Side::Black, PieceKind::Pawn, 3, 6)
        .with(Side::Black, PieceKind::Pawn, 4, 6);
    assert_eq!(MaterialEvaluator::new(&PAWNS_ONLY).evaluate(&pos), -2.0);
}
