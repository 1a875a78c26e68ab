//! Core types for chess.
//!
//! This crate provides the value types shared by the rule engine and the
//! hosts that drive it:
//! - [`PieceKind`] and [`Color`] for piece identity
//! - [`Square`] for row/column board coordinates
//! - [`Move`] and [`MoveKind`] for classified moves
//! - [`PieceView`] for rendering occupied squares
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on all of them.

mod color;
mod error;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use error::ParseError;
pub use mov::{CastleSide, Move, MoveKind};
pub use piece::{PieceKind, PieceView};
pub use square::{Square, BOARD_LENGTH};
