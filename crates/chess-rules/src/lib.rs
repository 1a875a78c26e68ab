//! Chess move legality engine.
//!
//! This crate provides:
//! - [`Board`] - arena-backed board state with per-color rosters
//! - [`rules`] - per-kind legality rules (pure, never mutate the board)
//! - [`attempt_move`] - validation plus all-or-nothing application of a move
//! - [`resolve_promotion`] - replacing a pawn that reached its last row
//! - [`Game`] - a session with turn order, pending promotions and tap selection
//!
//! # Coordinates
//!
//! Row 0 is Black's home row and row 7 is White's; White pawns move toward
//! row 0. Check, checkmate and stalemate are not detected, and castling does
//! not consider attacked squares.
//!
//! # Example
//!
//! ```
//! use chess_core::{PieceKind, Square};
//! use chess_rules::{attempt_move, Board, MoveOutcome};
//!
//! let board = Board::new_game();
//! let from = Square::new(6, 4).unwrap();
//! let to = Square::new(4, 4).unwrap();
//!
//! match attempt_move(&board, from, to) {
//!     MoveOutcome::Accepted(accepted) => {
//!         assert_eq!(accepted.board.view_at(to).unwrap().kind, PieceKind::Pawn);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

mod board;
mod error;
mod game;
mod piece;
mod promotion;
pub mod rules;
mod validator;

pub use board::Board;
pub use error::{GameError, RulesError};
pub use game::{Game, GameConfig, GameEvent, TapResult};
pub use piece::{Piece, PieceId};
pub use promotion::{is_promotion_eligible, resolve_promotion};
pub use rules::{classify, is_valid_move};
pub use validator::{attempt_move, attempt_move_coords, Accepted, MoveOutcome};
