//! Move representation.

use crate::Square;
use std::fmt;

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleSide {
    /// Toward column 7.
    KingSide,
    /// Toward column 0.
    QueenSide,
}

impl CastleSide {
    /// Column the king must stand on to castle.
    pub const KING_FROM_COL: u8 = 4;

    /// Column the castling rook starts on.
    #[inline]
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the castling rook lands on, beside the king.
    #[inline]
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }
}

/// What kind of move a legal (from, to) pair turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Pawn advancing two squares from its starting square.
    DoubleStep,
    /// Capture of the piece standing on the destination.
    Capture,
    /// Pawn capture of the pawn beside it that just advanced two squares.
    EnPassant,
    /// King moving two squares with the rook jumping beside it.
    Castle(CastleSide),
}

impl MoveKind {
    /// Returns true if this move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// A classified chess move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// For castling moves, returns the rook's (from, to) squares.
    pub fn rook_move(self) -> Option<(Square, Square)> {
        match self.kind {
            MoveKind::Castle(side) => {
                let row = self.from.row();
                Some((
                    Square::new(row, side.rook_from_col())?,
                    Square::new(row, side.rook_to_col())?,
                ))
            }
            _ => None,
        }
    }

    /// For en passant moves, returns the square of the pawn being captured.
    pub fn en_passant_victim(self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassant => Square::new(self.from.row(), self.to.col()),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{} {:?})", self.from, self.to, self.kind)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
