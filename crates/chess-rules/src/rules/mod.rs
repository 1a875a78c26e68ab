//! Per-kind legality rules.
//!
//! Legality is a pure question about the board: nothing here mutates state.
//! [`classify`] answers it and also reports what kind of move the pair is, so
//! the validator knows which side effects to apply.

mod king;
mod pawn;
mod slider;

use chess_core::{MoveKind, PieceKind, Square};

pub(crate) use pawn::is_on_promotion_row;

use crate::{Board, Piece};

/// Classifies moving `piece` to `to`, or returns `None` if the move is illegal.
pub fn classify(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    if piece.square() == to {
        return None;
    }
    let kind = match piece.kind() {
        PieceKind::Pawn => pawn::classify(board, piece, to),
        PieceKind::Knight => knight(board, piece, to),
        PieceKind::Bishop => slider::bishop(board, piece, to),
        PieceKind::Rook => slider::rook(board, piece, to),
        PieceKind::Queen => slider::queen(board, piece, to),
        PieceKind::King => king::classify(board, piece, to),
    };
    tracing::trace!(piece = ?piece.kind(), from = %piece.square(), %to, ?kind, "classified");
    kind
}

/// Returns true if the piece on `from` may legally move to `to`.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    board
        .piece_at(from)
        .is_some_and(|piece| classify(board, piece, to).is_some())
}

/// Shared landing rule: empty squares are quiet moves, enemy pieces are
/// captures, and own pieces block.
fn landing(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    match board.piece_at(to) {
        None => Some(MoveKind::Quiet),
        Some(target) if piece.can_capture(target) => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

fn knight(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    let (drow, dcol) = piece.square().delta_to(to);
    match (drow.abs(), dcol.abs()) {
        (1, 2) | (2, 1) => landing(board, piece, to),
        _ => None,
    }
}
