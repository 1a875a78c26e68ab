//! Player color representation.

use crate::square::BOARD_LENGTH;

/// Represents the two players in chess.
///
/// Row 0 is Black's home row and row 7 is White's, so White pawns travel
/// toward decreasing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a single pawn step (-1 for White, +1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the home row holding this color's back rank (7 for White, 0 for Black).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => BOARD_LENGTH - 1,
            Color::Black => 0,
        }
    }

    /// Returns the row this color's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => BOARD_LENGTH - 2,
            Color::Black => 1,
        }
    }

    /// Returns the row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_row()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
