//! Pawn rules: single and double advance, diagonal capture, en passant.
//!
//! Evaluation never touches the board. Whether a pawn just advanced two
//! squares lives on the board as the en passant target, which the validator
//! sets when it applies a double step and clears before every other move.

use chess_core::{MoveKind, PieceKind, Square};

use crate::{Board, Piece};

pub(super) fn classify(board: &Board, pawn: &Piece, to: Square) -> Option<MoveKind> {
    let from = pawn.square();
    let (drow, dcol) = from.delta_to(to);
    let dir = pawn.color().pawn_direction();

    match (dcol.abs(), drow) {
        (0, d) if d == dir => board.is_empty(to).then_some(MoveKind::Quiet),
        (0, d) if d == 2 * dir => {
            let passed = from.offset(dir, 0)?;
            let clear = !pawn.has_moved() && board.is_empty(passed) && board.is_empty(to);
            clear.then_some(MoveKind::DoubleStep)
        }
        (1, d) if d == dir => match board.piece_at(to) {
            Some(target) => pawn.can_capture(target).then_some(MoveKind::Capture),
            None => en_passant(board, pawn, to),
        },
        _ => None,
    }
}

/// The captured pawn sits beside the mover, on the mover's row and the
/// destination's column, and must be the one that just advanced two squares.
fn en_passant(board: &Board, pawn: &Piece, to: Square) -> Option<MoveKind> {
    let victim_square = Square::new(pawn.square().row(), to.col())?;
    if board.en_passant_target() != Some(victim_square) {
        return None;
    }
    let victim = board.piece_at(victim_square)?;
    let capturable = victim.kind() == PieceKind::Pawn && pawn.can_capture(victim);
    capturable.then_some(MoveKind::EnPassant)
}

/// A pawn is eligible for promotion once it stands on the opposing home row.
pub(crate) fn is_on_promotion_row(piece: &Piece) -> bool {
    piece.kind() == PieceKind::Pawn && piece.square().row() == piece.color().promotion_row()
}
