//! Board square representation.

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Number of rows and columns on the board.
pub const BOARD_LENGTH: u8 = 8;

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is Black's home row, row 7 is White's. Columns run 0-7 left to
/// right as seen from White. The row-major index (`row * 8 + col`) matches
/// the cell order of an 8x8 grid view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_LENGTH && col < BOARD_LENGTH {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, as supplied by callers that
    /// compute offsets or accept raw input.
    pub fn try_from_signed(row: i32, col: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    /// Creates a square from its row-major grid index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < (BOARD_LENGTH as usize * BOARD_LENGTH as usize) {
            Some(Square {
                row: (index / BOARD_LENGTH as usize) as u8,
                col: (index % BOARD_LENGTH as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row-major grid index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_LENGTH as usize + self.col as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square shifted by the given deltas, if still on the board.
    #[inline]
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        Square::try_from_signed(
            i32::from(self.row) + i32::from(drow),
            i32::from(self.col) + i32::from(dcol),
        )
    }

    /// Returns the signed (row, col) delta from `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }

    /// Returns true for light squares. Row 0 starts with a light square.
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Iterates over all 64 squares in grid order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..(BOARD_LENGTH as usize * BOARD_LENGTH as usize)).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSquare(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<u8>().map_err(|_| invalid())?;
        let col = col.trim().parse::<u8>().map_err(|_| invalid())?;
        Square::new(row, col).ok_or_else(invalid)
    }
}
