//! Check and checkmate.

use grid_chess_core::{Coord, Side};

use super::{is_attacked, king_in_check, GameStatus};
use crate::Board;

impl Board {
    /// Returns true if `side`'s king is attacked by any opposing piece.
    ///
    /// A side with no king on the board is not in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        king_in_check(&self.grid, side)
    }

    /// Returns true if `side` is in check and no move of its pieces gets
    /// it out.
    ///
    /// Every geometrically possible move of every piece of `side` is played
    /// out on a copy of the grid. The trials use plain geometry: no
    /// en passant, no castling. The live board is never touched.
    pub fn is_checkmate(&self, side: Side) -> bool {
        if !self.is_in_check(side) {
            return false;
        }

        for piece in self.grid.pieces_of(side) {
            for to in piece.geometric_targets(&self.grid) {
                let mut trial = self.grid;
                trial.relocate(piece.coord(), to);
                if !king_in_check(&trial, side) {
                    return false;
                }
            }
        }

        true
    }

    /// Returns true if a piece not of `defending_side` reaches `coord`.
    pub fn is_square_under_attack(&self, coord: Coord, defending_side: Side) -> bool {
        is_attacked(&self.grid, coord, defending_side)
    }

    /// Status of `side`: checkmate first, then check.
    pub fn status_of(&self, side: Side) -> GameStatus {
        if self.is_checkmate(side) {
            GameStatus::Checkmate(side)
        } else if self.is_in_check(side) {
            GameStatus::Check(side)
        } else {
            GameStatus::InProgress
        }
    }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.status_of(self.side_to_move)
    }
}
