//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Error returned when converting raw numbers into a [`Coord`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("coordinate ({row}, {col}) is off the board")]
pub struct CoordError {
    pub row: i32,
    pub col: i32,
}

/// A cell of the 8x8 grid, addressed by `(row, col)`.
///
/// Row 0 is Black's back rank and row 7 is White's, so in algebraic
/// notation `row 7, col 0` is `a1` and `row 0, col 7` is `h8`.
///
/// A `Coord` is always on the board; every constructor checks bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if it is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed values, as produced by pixel arithmetic.
    #[inline]
    pub const fn from_signed(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 || row >= BOARD_SIZE as i32 || col >= BOARD_SIZE as i32 {
            None
        } else {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Creates a coordinate from a cell index in `0..64`, row-major.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Coord {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Parses algebraic notation such as `"e4"`.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Coord {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Row index, 0 at Black's back rank.
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index, 0 on the a-file.
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Returns the coordinate shifted by `(d_row, d_col)`, if it stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::from_signed(self.row as i32 + d_row as i32, self.col as i32 + d_col as i32)
    }

    /// Same row, different column.
    #[inline]
    pub const fn with_col(self, col: u8) -> Option<Self> {
        Self::new(self.row, col)
    }

    /// Iterates over all 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Coord::from_index)
    }

    /// Returns the algebraic notation for this cell.
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col) as char,
            (b'8' - self.row) as char
        )
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or(CoordError {
            row: row as i32,
            col: col as i32,
        })
    }
}

impl From<Coord> for (u8, u8) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
