//! Errors produced when parsing core types from text.

use thiserror::Error;

/// Errors that can occur when parsing squares or piece kinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square: expected \"row,col\" with both in 0..8, got '{0}'")]
    InvalidSquare(String),

    #[error("invalid piece kind: '{0}'")]
    InvalidPieceKind(String),
}
