//! Records of accepted moves.

use grid_chess_core::{Coord, Side};
use std::fmt;

use crate::{PieceDescriptor, Wing};

/// What kind of move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Onto an empty cell.
    Quiet,
    /// Onto a cell holding an opposing piece.
    Capture,
    /// Pawn advance of two rows; sets the en-passant target.
    DoubleStep,
    /// Diagonal pawn move onto the en-passant target.
    EnPassant,
    /// King and rook castling together.
    Castle(Wing),
}

/// An accepted move, as returned by [`Board::try_move`](crate::Board::try_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Coord,
    pub to: Coord,
    pub kind: MoveKind,
    /// The piece removed from the board, if any.
    pub captured: Option<PieceDescriptor>,
}

impl MoveRecord {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Castle(Wing::KingSide) => write!(f, "O-O"),
            MoveKind::Castle(Wing::QueenSide) => write!(f, "O-O-O"),
            _ if self.is_capture() => write!(f, "{}x{}", self.from, self.to),
            _ => write!(f, "{}-{}", self.from, self.to),
        }
    }
}
