//! Move validation and application.
//!
//! [`attempt_move`] resolves the piece on the source square, asks its rule
//! whether the move is legal, and on acceptance applies every side effect
//! (captures, the castling rook, the en passant victim) to a copy of the
//! board. The caller's board is never modified, so a rejected move leaves
//! no trace.

use chess_core::{Move, MoveKind, Square};

use crate::rules::{classify, is_on_promotion_row};
use crate::{Board, Piece, RulesError};

/// An applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Board after the move.
    pub board: Board,
    /// The move, classified.
    pub mv: Move,
    /// The captured piece, now out of play.
    pub captured: Option<Piece>,
}

impl Accepted {
    /// For castling, the rook's (from, to) squares so the host can redraw them.
    pub fn rook_move(&self) -> Option<(Square, Square)> {
        self.mv.rook_move()
    }
}

/// Result of a move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is illegal; the board is unchanged.
    Rejected(RulesError),
    /// The move was applied.
    Accepted(Accepted),
    /// The move was applied and a pawn reached its promotion row; the caller
    /// must resolve the promotion before the turn is complete.
    PendingPromotion(Accepted),
}

impl MoveOutcome {
    /// Returns true unless the move was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Converts the outcome into a `Result`, plus whether promotion is pending.
    pub fn into_result(self) -> Result<(Accepted, bool), RulesError> {
        match self {
            MoveOutcome::Rejected(err) => Err(err),
            MoveOutcome::Accepted(accepted) => Ok((accepted, false)),
            MoveOutcome::PendingPromotion(accepted) => Ok((accepted, true)),
        }
    }
}

/// Validates the move `from` -> `to` and, if legal, applies it to a copy of `board`.
pub fn attempt_move(board: &Board, from: Square, to: Square) -> MoveOutcome {
    let mv = match validate(board, from, to) {
        Ok(mv) => mv,
        Err(err) => {
            tracing::debug!(%from, %to, %err, "move rejected");
            return MoveOutcome::Rejected(err);
        }
    };

    let accepted = match apply(board, mv) {
        Ok(accepted) => accepted,
        Err(err) => {
            tracing::error!(?mv, %err, "failed to apply a legal move");
            return MoveOutcome::Rejected(err);
        }
    };

    let pending = accepted
        .board
        .piece_at(to)
        .is_some_and(is_on_promotion_row);
    tracing::debug!(
        ?mv,
        captured = ?accepted.captured.as_ref().map(Piece::kind),
        pending,
        "move accepted"
    );

    if pending {
        MoveOutcome::PendingPromotion(accepted)
    } else {
        MoveOutcome::Accepted(accepted)
    }
}

/// Like [`attempt_move`], for raw coordinates that may lie off the board.
pub fn attempt_move_coords(
    board: &Board,
    (from_row, from_col): (i32, i32),
    (to_row, to_col): (i32, i32),
) -> MoveOutcome {
    let square = |row, col| {
        Square::try_from_signed(row, col).ok_or(RulesError::OutOfRange { row, col })
    };
    match (square(from_row, from_col), square(to_row, to_col)) {
        (Ok(from), Ok(to)) => attempt_move(board, from, to),
        (Err(err), _) | (_, Err(err)) => {
            tracing::debug!(%err, "move rejected");
            MoveOutcome::Rejected(err)
        }
    }
}

fn validate(board: &Board, from: Square, to: Square) -> Result<Move, RulesError> {
    let piece = board
        .piece_at(from)
        .ok_or(RulesError::NoPieceAtSource(from))?;
    if from == to {
        return Err(RulesError::SameSquare(from));
    }
    let kind = classify(board, piece, to).ok_or(RulesError::InvalidMove {
        kind: piece.kind(),
        from,
        to,
    })?;
    Ok(Move::new(from, to, kind))
}

fn apply(board: &Board, mv: Move) -> Result<Accepted, RulesError> {
    let mut next = board.clone();
    // En passant eligibility lasts exactly one move.
    next.set_en_passant(None);

    let mover = next
        .piece_id_at(mv.from)
        .ok_or(RulesError::NoPieceAtSource(mv.from))?;

    let captured = match mv.kind {
        MoveKind::Capture => next.remove_at(mv.to),
        MoveKind::EnPassant => mv.en_passant_victim().and_then(|sq| next.remove_at(sq)),
        _ => None,
    };
    if mv.kind.is_capture() && captured.is_none() {
        return Err(RulesError::InternalInconsistency(format!(
            "{:?} found nothing to capture",
            mv
        )));
    }

    next.move_piece(mover, mv.to)?;

    if let Some((rook_from, rook_to)) = mv.rook_move() {
        let rook = next.piece_id_at(rook_from).ok_or_else(|| {
            RulesError::InternalInconsistency(format!("no castling rook on {}", rook_from))
        })?;
        next.move_piece(rook, rook_to)?;
    }

    if mv.kind == MoveKind::DoubleStep {
        next.set_en_passant(Some(mv.to));
    }

    Ok(Accepted {
        board: next.verified()?,
        mv,
        captured,
    })
}
