//! Pieces and their movement geometry.

use grid_chess_core::{Coord, PieceKind, Side};
use serde::{Deserialize, Serialize};

use crate::Grid;

/// Knight jump offsets as `(d_row, d_col)`.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// What the presentation layer needs to draw a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceDescriptor {
    pub kind: PieceKind,
    pub side: Side,
}

impl PieceDescriptor {
    /// Returns the display symbol (uppercase for White).
    #[inline]
    pub const fn symbol(self) -> char {
        self.kind.symbol(self.side)
    }
}

/// A piece on the board.
///
/// Kind and side never change. The position and has-moved flag are
/// updated by the board whenever the piece moves; the recorded position
/// always matches the grid cell that owns the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    coord: Coord,
    has_moved: bool,
}

impl Piece {
    /// Creates an unmoved piece at `coord`.
    pub const fn new(kind: PieceKind, side: Side, coord: Coord) -> Self {
        Piece {
            kind,
            side,
            coord,
            has_moved: false,
        }
    }

    /// The piece's kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The side that owns the piece.
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The cell the piece stands on.
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns true once the piece has left its starting cell.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Kind and side, without position.
    #[inline]
    pub const fn descriptor(&self) -> PieceDescriptor {
        PieceDescriptor {
            kind: self.kind,
            side: self.side,
        }
    }

    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    pub(crate) fn set_moved(&mut self, moved: bool) {
        self.has_moved = moved;
    }

    /// Returns true if this piece could reach `target` by its movement
    /// pattern alone.
    ///
    /// Only the piece's own state and the occupancy of `grid` are used. Check,
    /// castling rights and en passant are the board's business.
    pub fn is_legal_geometry(&self, target: Coord, grid: &Grid) -> bool {
        if target == self.coord {
            return false;
        }
        if grid.side_at(target) == Some(self.side) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => self.is_pawn_move(target, grid),
            PieceKind::Rook => self.is_rook_move(target, grid),
            PieceKind::Knight => self.is_knight_move(target),
            PieceKind::Bishop => self.is_bishop_move(target, grid),
            PieceKind::Queen => self.is_queen_move(target, grid),
            PieceKind::King => self.is_king_move(target),
        }
    }

    /// Every cell this piece reaches by geometry, in row-major order.
    pub fn geometric_targets(&self, grid: &Grid) -> Vec<Coord> {
        Coord::all()
            .filter(|&target| self.is_legal_geometry(target, grid))
            .collect()
    }

    /// Signed `(d_row, d_col)` from this piece to `target`.
    fn delta(&self, target: Coord) -> (i8, i8) {
        (
            target.row() as i8 - self.coord.row() as i8,
            target.col() as i8 - self.coord.col() as i8,
        )
    }

    fn is_pawn_move(&self, target: Coord, grid: &Grid) -> bool {
        let direction = self.side.pawn_direction();
        let (d_row, d_col) = self.delta(target);
        let occupant = grid.side_at(target);

        if d_col == 0 {
            if occupant.is_some() {
                return false;
            }
            if d_row == direction {
                return true;
            }
            if !self.has_moved && d_row == 2 * direction {
                return self
                    .coord
                    .offset(direction, 0)
                    .is_some_and(|middle| !grid.is_occupied(middle));
            }
            false
        } else {
            d_col.abs() == 1 && d_row == direction && occupant == Some(self.side.opposite())
        }
    }

    fn is_rook_move(&self, target: Coord, grid: &Grid) -> bool {
        let (d_row, d_col) = self.delta(target);
        (d_row == 0 || d_col == 0) && self.is_path_clear(target, grid)
    }

    fn is_knight_move(&self, target: Coord) -> bool {
        KNIGHT_OFFSETS.contains(&self.delta(target))
    }

    fn is_bishop_move(&self, target: Coord, grid: &Grid) -> bool {
        let (d_row, d_col) = self.delta(target);
        d_row.abs() == d_col.abs() && self.is_path_clear(target, grid)
    }

    fn is_queen_move(&self, target: Coord, grid: &Grid) -> bool {
        let (d_row, d_col) = self.delta(target);
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();
        (straight || diagonal) && self.is_path_clear(target, grid)
    }

    fn is_king_move(&self, target: Coord) -> bool {
        let (d_row, d_col) = self.delta(target);
        d_row.abs() <= 1 && d_col.abs() <= 1
    }

    /// Scans the cells strictly between this piece and `target`.
    ///
    /// Callers have already checked that `target` lies on a rank, file or
    /// diagonal through this piece.
    fn is_path_clear(&self, target: Coord, grid: &Grid) -> bool {
        let (d_row, d_col) = self.delta(target);
        let step = (d_row.signum(), d_col.signum());

        let mut current = self.coord.offset(step.0, step.1);
        while let Some(cell) = current {
            if cell == target {
                return true;
            }
            if grid.is_occupied(cell) {
                return false;
            }
            current = cell.offset(step.0, step.1);
        }
        false
    }
}
