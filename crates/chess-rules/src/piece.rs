//! The piece entity stored in the board's arena.

use chess_core::{Color, PieceKind, PieceView, Square};

/// Stable handle to a piece slot in a [`Board`](crate::Board).
///
/// Ids are never reused within one board, so a captured piece's id stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece on the board.
///
/// Fields are read-only outside the crate; every write goes through the
/// board so `square` always matches the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) square: Square,
    pub(crate) has_moved: bool,
}

impl Piece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns true once the piece has left its starting square.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// A piece can capture `target` only if it belongs to the other side.
    #[inline]
    pub fn can_capture(&self, target: &Piece) -> bool {
        self.color != target.color
    }

    /// Returns the rendering view of this piece.
    #[inline]
    pub fn view(&self) -> PieceView {
        PieceView {
            kind: self.kind,
            color: self.color,
            square: self.square,
        }
    }
}
