//! Error types for move validation and game sessions.

use chess_core::{PieceKind, Square};
use thiserror::Error;

/// Reasons the engine refuses a move or promotion.
///
/// Every variant except [`RulesError::InternalInconsistency`] is recoverable
/// and leaves the board untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("no piece at {0}")]
    NoPieceAtSource(Square),

    #[error("destination {0} is the piece's own square")]
    SameSquare(Square),

    #[error("coordinates ({row},{col}) are off the board")]
    OutOfRange { row: i32, col: i32 },

    #[error("{kind} cannot move from {from} to {to}")]
    InvalidMove {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("no pawn eligible for promotion at {0}")]
    PromotionNotEligible(Square),

    #[error("a pawn cannot be promoted to a {0}")]
    InvalidPromotionChoice(PieceKind),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("board state is inconsistent: {0}")]
    InternalInconsistency(String),
}

/// Errors raised by a [`Game`](crate::Game) session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("it is {0}'s turn")]
    NotYourTurn(chess_core::Color),

    #[error("a promotion choice is pending at {0}")]
    PromotionPending(Square),

    #[error("no promotion is pending")]
    NoPendingPromotion,
}
