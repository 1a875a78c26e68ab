//! King rules: one step in any direction, or castling.

use chess_core::{CastleSide, MoveKind, PieceKind, Square};

use super::{landing, slider::path_clear};
use crate::{Board, Piece};

pub(super) fn classify(board: &Board, king: &Piece, to: Square) -> Option<MoveKind> {
    let (drow, dcol) = king.square().delta_to(to);
    match (drow.abs(), dcol.abs()) {
        (0..=1, 0..=1) => landing(board, king, to),
        (0, 2) => castle(board, king, to),
        _ => None,
    }
}

/// Castling needs an unmoved king, an unmoved rook of the same color on the
/// corner of the king's row, and nothing between them. Attacked squares are
/// not considered.
fn castle(board: &Board, king: &Piece, to: Square) -> Option<MoveKind> {
    if king.has_moved() || king.square().col() != CastleSide::KING_FROM_COL {
        return None;
    }
    let side = if to.col() > king.square().col() {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    };
    if to.col() != side.king_to_col() {
        return None;
    }
    let rook_square = Square::new(king.square().row(), side.rook_from_col())?;
    let rook = board.piece_at(rook_square)?;
    let rook_ready =
        rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved();
    if !rook_ready || !path_clear(board, king.square(), rook_square) {
        return None;
    }
    Some(MoveKind::Castle(side))
}
