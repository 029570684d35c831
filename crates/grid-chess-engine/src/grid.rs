//! The 8x8 grid of piece ownership.

use grid_chess_core::{Coord, Layout, PieceKind, Side, BOARD_SIZE};

use crate::Piece;

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// An 8x8 grid where each cell owns at most one [`Piece`].
///
/// Cells are stored row-major and addressed by [`Coord::index`]. The grid
/// is plain data and cheap to copy, so rule checks that need to try a move
/// out work on a copy instead of mutating the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Piece>; CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Creates an empty grid.
    pub const fn empty() -> Self {
        Grid {
            cells: [None; CELLS],
        }
    }

    /// Builds a grid from a layout.
    ///
    /// A piece counts as unmoved only while it stands on a standard
    /// starting cell for its kind and side.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut grid = Grid::empty();
        for p in layout.placements() {
            let mut piece = Piece::new(p.kind, p.side, p.coord);
            piece.set_moved(!Layout::is_standard_start(p.coord, p.kind, p.side));
            grid.put(piece);
        }
        grid
    }

    /// Returns the piece on `coord`, if any.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Piece> {
        self.cells[coord.index()].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, coord: Coord) -> Option<&mut Piece> {
        self.cells[coord.index()].as_mut()
    }

    /// Returns true if a piece stands on `coord`.
    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Returns the side of the piece on `coord`, if any.
    #[inline]
    pub fn side_at(&self, coord: Coord) -> Option<Side> {
        self.get(coord).map(Piece::side)
    }

    /// Places `piece` on the cell it records, returning the previous occupant.
    pub(crate) fn put(&mut self, piece: Piece) -> Option<Piece> {
        let coord = piece.coord();
        self.cells[coord.index()].replace(piece)
    }

    /// Removes and returns the piece on `coord`.
    pub(crate) fn take(&mut self, coord: Coord) -> Option<Piece> {
        self.cells[coord.index()].take()
    }

    /// Moves the piece on `from` to `to`, keeping its recorded position in
    /// sync. Returns the piece previously on `to`, which is dropped from the
    /// grid. Does nothing if `from` is empty.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let mut piece = self.take(from)?;
        piece.set_coord(to);
        self.put(piece)
    }

    /// Iterates over all pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Iterates over the pieces of one side in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.side() == side)
    }

    /// Returns the first king of `side` in row-major order.
    pub fn find_king(&self, side: Side) -> Option<Coord> {
        self.pieces_of(side)
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::coord)
    }

    /// Serializes the occupancy as a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, cells) in self.cells.chunks(BOARD_SIZE as usize).enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.descriptor().symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row + 1 < BOARD_SIZE as usize {
                out.push('/');
            }
        }
        out
    }
}
