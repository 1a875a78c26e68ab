//! Pawn promotion.

use chess_core::{PieceKind, Square};

use crate::rules::is_on_promotion_row;
use crate::{Board, RulesError};

/// Returns true if `square` holds a pawn standing on its promotion row.
pub fn is_promotion_eligible(board: &Board, square: Square) -> bool {
    board.piece_at(square).is_some_and(is_on_promotion_row)
}

/// Replaces the eligible pawn on `square` with a piece of `kind`.
///
/// The new piece keeps the pawn's color, square and roster slot and counts
/// as having moved. Returns the updated board; `board` itself is untouched.
pub fn resolve_promotion(
    board: &Board,
    square: Square,
    kind: PieceKind,
) -> Result<Board, RulesError> {
    if !is_promotion_eligible(board, square) {
        return Err(RulesError::PromotionNotEligible(square));
    }
    if !kind.is_promotion_choice() {
        return Err(RulesError::InvalidPromotionChoice(kind));
    }

    let mut next = board.clone();
    next.replace_at(square, kind)?;
    let next = next.verified()?;
    tracing::debug!(%square, %kind, "pawn promoted");
    Ok(next)
}
