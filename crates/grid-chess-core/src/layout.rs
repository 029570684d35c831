//! Piece layouts written as placement strings.
//!
//! A placement string lists the eight rows from row 0 (Black's back rank)
//! to row 7, separated by `/`. Within a row, a letter is a piece (see
//! [`PieceKind::symbol`]) and a digit from 1 to 8 skips that many empty cells. This is
//! the first field of a FEN record.

use thiserror::Error;

use crate::{Coord, PieceKind, Side};

/// Errors that can occur when parsing placement strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid character '{symbol}' in row {row}")]
    InvalidSymbol { symbol: char, row: usize },

    #[error("row {row} has {cells} cells, expected 8")]
    RowWidth { row: usize, cells: u32 },
}

/// One piece of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    pub kind: PieceKind,
    pub side: Side,
}

/// A parsed placement: which piece stands on which cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    /// The standard starting placement.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Returns the standard starting layout.
    pub fn standard() -> Self {
        let mut placements = Vec::with_capacity(32);
        for side in [Side::Black, Side::White] {
            for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                placements.extend(Coord::new(side.home_row(), col as u8).map(|coord| Placement {
                    coord,
                    kind: *kind,
                    side,
                }));
            }
            for col in 0..8 {
                placements.extend(Coord::new(side.pawn_row(), col).map(|coord| Placement {
                    coord,
                    kind: PieceKind::Pawn,
                    side,
                }));
            }
        }
        Layout { placements }
    }

    /// Parses a placement string.
    pub fn parse(placement: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut placements = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let mut cells = 0u32;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    cells += skip;
                } else if let Some((kind, side)) = PieceKind::from_symbol(c) {
                    if let Some(coord) = Coord::new(row as u8, cells as u8) {
                        placements.push(Placement { coord, kind, side });
                    }
                    cells += 1;
                } else {
                    return Err(LayoutError::InvalidSymbol { symbol: c, row });
                }
            }
            if cells != 8 {
                return Err(LayoutError::RowWidth { row, cells });
            }
        }

        Ok(Layout { placements })
    }

    /// Returns the pieces of this layout.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns true if `kind` of `side` stands on `coord` in the standard layout.
    pub fn is_standard_start(coord: Coord, kind: PieceKind, side: Side) -> bool {
        match kind {
            PieceKind::Pawn => coord.row() == side.pawn_row(),
            _ => {
                coord.row() == side.home_row()
                    && PieceKind::BACK_RANK[coord.col() as usize] == kind
            }
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
