//! Castling bookkeeping: which kings and rooks have left their start cells.

use grid_chess_core::{Coord, Side};
use serde::{Deserialize, Serialize};

/// The two directions a king can castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wing {
    KingSide,
    QueenSide,
}

impl Wing {
    /// Column the king starts on.
    pub const KING_COL: u8 = 4;

    /// Column of this wing's rook at the start of the game.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            Wing::KingSide => 7,
            Wing::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            Wing::KingSide => 6,
            Wing::QueenSide => 2,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            Wing::KingSide => 5,
            Wing::QueenSide => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            Wing::KingSide => &[5, 6],
            Wing::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king stands on, passes through, and lands on; none may
    /// be attacked.
    pub const fn king_path_cols(self) -> [u8; 3] {
        match self {
            Wing::KingSide => [4, 5, 6],
            Wing::QueenSide => [4, 3, 2],
        }
    }

    /// Wing a king move from `from_col` to `to_col` castles toward.
    #[inline]
    pub const fn from_king_move(from_col: u8, to_col: u8) -> Self {
        if to_col > from_col {
            Wing::KingSide
        } else {
            Wing::QueenSide
        }
    }

    /// Home-row cell of this wing's rook for `side`.
    pub fn rook_origin(self, side: Side) -> Option<Coord> {
        Coord::new(side.home_row(), self.rook_col())
    }

    /// Home-row cell of the king for `side`.
    pub fn king_origin(side: Side) -> Option<Coord> {
        Coord::new(side.home_row(), Self::KING_COL)
    }
}

impl std::fmt::Display for Wing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wing::KingSide => write!(f, "king side"),
            Wing::QueenSide => write!(f, "queen side"),
        }
    }
}

/// The six castling flags: king moved, king-side rook moved and queen-side
/// rook moved, for each side. A set bit means the piece has moved (or its
/// start cell was captured on) and that castle is gone for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE_MOVED: CastlingRights = CastlingRights(0);
    const WHITE_KING_MOVED: u8 = 0b00_0001;
    const WHITE_KING_ROOK_MOVED: u8 = 0b00_0010;
    const WHITE_QUEEN_ROOK_MOVED: u8 = 0b00_0100;
    const BLACK_KING_MOVED: u8 = 0b00_1000;
    const BLACK_KING_ROOK_MOVED: u8 = 0b01_0000;
    const BLACK_QUEEN_ROOK_MOVED: u8 = 0b10_0000;

    const fn king_flag(side: Side) -> u8 {
        match side {
            Side::White => Self::WHITE_KING_MOVED,
            Side::Black => Self::BLACK_KING_MOVED,
        }
    }

    const fn rook_flag(side: Side, wing: Wing) -> u8 {
        match (side, wing) {
            (Side::White, Wing::KingSide) => Self::WHITE_KING_ROOK_MOVED,
            (Side::White, Wing::QueenSide) => Self::WHITE_QUEEN_ROOK_MOVED,
            (Side::Black, Wing::KingSide) => Self::BLACK_KING_ROOK_MOVED,
            (Side::Black, Wing::QueenSide) => Self::BLACK_QUEEN_ROOK_MOVED,
        }
    }

    /// Returns true once `side`'s king has left its start cell.
    #[inline]
    pub const fn king_moved(self, side: Side) -> bool {
        self.0 & Self::king_flag(side) != 0
    }

    /// Returns true once the rook of `wing` has left its start cell or been
    /// captured there.
    #[inline]
    pub const fn rook_moved(self, side: Side, wing: Wing) -> bool {
        self.0 & Self::rook_flag(side, wing) != 0
    }

    /// True while neither the king nor this wing's rook has moved.
    #[inline]
    pub const fn is_available(self, side: Side, wing: Wing) -> bool {
        !self.king_moved(side) && !self.rook_moved(side, wing)
    }

    /// Records that `side`'s king has moved. Both wings are gone.
    #[inline]
    pub(crate) fn mark_king_moved(&mut self, side: Side) {
        self.0 |= Self::king_flag(side);
    }

    /// Records that the rook of `wing` has moved.
    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, side: Side, wing: Wing) {
        self.0 |= Self::rook_flag(side, wing);
    }

    /// Marks the rook whose start cell is `coord`, if any.
    pub(crate) fn mark_rook_origin(&mut self, coord: Coord) {
        for side in Side::ALL {
            for wing in [Wing::KingSide, Wing::QueenSide] {
                if wing.rook_origin(side) == Some(coord) {
                    self.mark_rook_moved(side, wing);
                }
            }
        }
    }
}
