//! Two-click move entry: select a piece, then pick its destination.

use grid_chess_core::Coord;

use super::Board;
use crate::{GameStatus, MoveError, MoveRecord};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing selected and the click was not on a piece of the side to
    /// move, or the click was off the board.
    Ignored,
    /// The clicked piece is now selected.
    Selected(Coord),
    /// The move from the selection was played. `status` describes the
    /// position for the new side to move.
    Moved {
        record: MoveRecord,
        status: GameStatus,
    },
    /// The move from the selection was refused. The selection is cleared.
    Rejected(MoveError),
}

impl Board {
    /// Handles a click on `coord`.
    ///
    /// Without an active selection, a click on a piece of the side to move
    /// selects it. With one, the click is the destination: the move is
    /// attempted and the selection cleared whatever the result.
    pub fn handle_selection(&mut self, coord: Coord) -> SelectionOutcome {
        let Some(from) = self.selection.take() else {
            if self.grid.side_at(coord) == Some(self.side_to_move) {
                tracing::trace!("selected {}", coord);
                self.selection = Some(coord);
                return SelectionOutcome::Selected(coord);
            }
            return SelectionOutcome::Ignored;
        };

        match self.try_move(from, coord) {
            Ok(record) => {
                let status = self.status();
                match status {
                    GameStatus::Checkmate(loser) => {
                        tracing::info!("Checkmate! {} wins", loser.opposite())
                    }
                    GameStatus::Check(side) => tracing::info!("Check! {} is in check", side),
                    GameStatus::InProgress => {}
                }
                SelectionOutcome::Moved { record, status }
            }
            Err(err) => {
                tracing::trace!("selection cleared: {}", err);
                SelectionOutcome::Rejected(err)
            }
        }
    }

    /// Handles a click given as signed `(row, col)`. Clicks off the board
    /// are ignored and leave any selection in place.
    pub fn handle_click(&mut self, row: i32, col: i32) -> SelectionOutcome {
        match Coord::from_signed(row, col) {
            Some(coord) => self.handle_selection(coord),
            None => SelectionOutcome::Ignored,
        }
    }
}
