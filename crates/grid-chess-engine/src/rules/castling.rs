//! Castling eligibility and execution.

use grid_chess_core::{Coord, PieceKind, Side};

use crate::{Board, MoveError, Wing};

impl Board {
    /// Returns true if `side` may castle toward the h-file rook.
    pub fn can_castle_king_side(&self, side: Side) -> bool {
        self.can_castle(side, Wing::KingSide)
    }

    /// Returns true if `side` may castle toward the a-file rook.
    pub fn can_castle_queen_side(&self, side: Side) -> bool {
        self.can_castle(side, Wing::QueenSide)
    }

    /// Returns true if `side` may castle toward `wing` right now.
    ///
    /// Requires: neither the king nor that rook has ever moved, both still
    /// stand on their home cells, every cell between them is empty, the side
    /// is not in check, and none of the cells the king stands on, crosses,
    /// or lands on is attacked.
    pub fn can_castle(&self, side: Side, wing: Wing) -> bool {
        if !self.castling.is_available(side, wing) {
            return false;
        }
        if !self.castle_pieces_in_place(side, wing) {
            return false;
        }

        let row = side.home_row();
        let blocked = wing
            .between_cols()
            .iter()
            .filter_map(|&col| Coord::new(row, col))
            .any(|cell| self.grid.is_occupied(cell));
        if blocked {
            return false;
        }

        if self.is_in_check(side) {
            return false;
        }

        !wing
            .king_path_cols()
            .iter()
            .filter_map(|&col| Coord::new(row, col))
            .any(|cell| self.is_square_under_attack(cell, side))
    }

    fn castle_pieces_in_place(&self, side: Side, wing: Wing) -> bool {
        let holds = |coord: Option<Coord>, kind: PieceKind| {
            coord
                .and_then(|c| self.grid.get(c))
                .is_some_and(|p| p.kind() == kind && p.side() == side)
        };
        holds(Wing::king_origin(side), PieceKind::King) && holds(wing.rook_origin(side), PieceKind::Rook)
    }

    /// Castles `side` king side. See [`Board::perform_castle`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CastlingUnavailable`] if the pieces are not in place.
    pub fn perform_castle_king_side(&mut self, side: Side) -> Result<(), MoveError> {
        self.perform_castle(side, Wing::KingSide)
    }

    /// Castles `side` queen side. See [`Board::perform_castle`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CastlingUnavailable`] if the pieces are not in place.
    pub fn perform_castle_queen_side(&mut self, side: Side) -> Result<(), MoveError> {
        self.perform_castle(side, Wing::QueenSide)
    }

    /// Moves king and rook to their castled cells and marks both as moved.
    ///
    /// This does not check eligibility, touch the castling flags, clear the
    /// en-passant target, or change the side to move; [`Board::try_move`]
    /// does all of that around it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CastlingUnavailable`] without changing anything
    /// if the king or rook is not on its home cell or a landing cell is
    /// taken.
    pub fn perform_castle(&mut self, side: Side, wing: Wing) -> Result<(), MoveError> {
        let unavailable = MoveError::CastlingUnavailable { side, wing };
        if !self.castle_pieces_in_place(side, wing) {
            return Err(unavailable);
        }

        let (Some(king_from), Some(rook_from)) = (Wing::king_origin(side), wing.rook_origin(side))
        else {
            return Err(unavailable);
        };
        let (Some(king_to), Some(rook_to)) = (
            king_from.with_col(wing.king_target_col()),
            king_from.with_col(wing.rook_target_col()),
        ) else {
            return Err(unavailable);
        };
        if self.grid.is_occupied(king_to) || self.grid.is_occupied(rook_to) {
            return Err(unavailable);
        }

        self.grid.relocate(king_from, king_to);
        self.grid.relocate(rook_from, rook_to);
        for cell in [king_to, rook_to] {
            if let Some(piece) = self.grid.get_mut(cell) {
                piece.set_moved(true);
            }
        }

        tracing::debug!("{} castled {}", side, wing);
        Ok(())
    }
}
