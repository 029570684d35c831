//! Board-level rules: attack detection, check, checkmate, and castling.
//!
//! Attacks are judged by raw piece geometry: a cell is attacked when an
//! opposing piece's [`Piece::is_legal_geometry`](crate::Piece::is_legal_geometry)
//! reaches it. For pawns that means the empty cells ahead they could
//! advance to, plus diagonal cells only while an enemy piece stands there.

mod castling;
mod check;

use grid_chess_core::{Coord, Side};
use serde::{Deserialize, Serialize};

use crate::Grid;

/// State of the game from the point of view of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Nothing to announce.
    InProgress,
    /// The given side is in check but has a way out.
    Check(Side),
    /// The given side is checkmated; the other side wins.
    Checkmate(Side),
}

impl GameStatus {
    /// The winning side, if the game is decided.
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

/// Returns true if any piece not of `defender` reaches `target` on `grid`.
pub fn is_attacked(grid: &Grid, target: Coord, defender: Side) -> bool {
    grid.pieces_of(defender.opposite())
        .any(|piece| piece.is_legal_geometry(target, grid))
}

/// Returns true if `side`'s king is attacked on `grid`. A side without a
/// king is never in check.
pub fn king_in_check(grid: &Grid, side: Side) -> bool {
    grid.find_king(side)
        .is_some_and(|king| is_attacked(grid, king, side))
}
