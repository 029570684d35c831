//! The game board: grid ownership, side to move, and move application.

mod selection;

pub use selection::SelectionOutcome;

use grid_chess_core::{Coord, Layout, PieceKind, Side};
use std::fmt;

use crate::{
    CastlingRights, ConfigError, EngineConfig, Grid, MoveError, MoveKind, MoveRecord, Piece,
    PieceDescriptor, Wing,
};

/// Authoritative game state for one session.
///
/// The board owns every piece through its [`Grid`] and carries the state
/// that cannot be read off the grid: whose turn it is, the en-passant
/// target left by the last move, the castling flags, and the cell the
/// player has selected. A new game means a new `Board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Side,
    pub(crate) selection: Option<Coord>,
    pub(crate) en_passant: Option<Coord>,
    pub(crate) castling: CastlingRights,
    pub(crate) forbid_self_check: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with the standard starting layout, White to move.
    pub fn new() -> Self {
        Self::from_layout(&Layout::standard(), Side::White)
    }

    /// Creates a board from an arbitrary layout.
    ///
    /// Castling flags start cleared only for kings and rooks still standing
    /// on their standard starting cells.
    pub fn from_layout(layout: &Layout, side_to_move: Side) -> Self {
        let grid = Grid::from_layout(layout);
        let mut castling = CastlingRights::NONE_MOVED;
        let unmoved = |coord: Option<Coord>, kind: PieceKind, side: Side| {
            coord
                .and_then(|c| grid.get(c))
                .is_some_and(|p| p.kind() == kind && p.side() == side && !p.has_moved())
        };
        for side in Side::ALL {
            if !unmoved(Wing::king_origin(side), PieceKind::King, side) {
                castling.mark_king_moved(side);
            }
            for wing in [Wing::KingSide, Wing::QueenSide] {
                if !unmoved(wing.rook_origin(side), PieceKind::Rook, side) {
                    castling.mark_rook_moved(side, wing);
                }
            }
        }

        Board {
            grid,
            side_to_move,
            selection: None,
            en_passant: None,
            castling,
            forbid_self_check: false,
        }
    }

    /// Creates a board as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Layout`] if the configured layout is malformed.
    pub fn with_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let layout = config.starting_layout()?;
        let mut board = Self::from_layout(&layout, config.first_to_move);
        board.forbid_self_check = config.forbid_self_check;
        Ok(board)
    }

    /// Read-only view of the grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The side whose move is next.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The selected cell, if a selection is active.
    #[inline]
    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// The cell a pawn may capture onto en passant, valid for the next move only.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Coord> {
        self.en_passant
    }

    /// Which kings and rooks have given up castling.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the piece on `coord`, for drawing.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceDescriptor> {
        self.grid.get(coord).map(Piece::descriptor)
    }

    /// Returns the piece at `(row, col)`, or `None` when off the board.
    pub fn get_piece(&self, row: i32, col: i32) -> Option<PieceDescriptor> {
        Coord::from_signed(row, col).and_then(|coord| self.piece_at(coord))
    }

    /// Serializes the current occupancy as a placement string.
    pub fn to_placement(&self) -> String {
        self.grid.to_placement()
    }

    /// Destinations the piece on `from` may move to.
    ///
    /// Starts from the piece's geometry over all 64 cells. A pawn may also
    /// move diagonally onto an empty cell, but only onto the en-passant
    /// target. Kings gain their castling destinations. Moves that leave the
    /// mover's own king attacked are kept unless the board was configured
    /// with `forbid_self_check`. An empty cell yields no moves.
    pub fn legal_moves(&self, from: Coord) -> Vec<Coord> {
        let Some(piece) = self.grid.get(from) else {
            return Vec::new();
        };

        let mut moves = piece.geometric_targets(&self.grid);

        if piece.kind() == PieceKind::Pawn {
            moves.extend(self.en_passant_capture(piece));
        }

        if piece.kind() == PieceKind::King {
            for wing in [Wing::KingSide, Wing::QueenSide] {
                if self.can_castle(piece.side(), wing) {
                    moves.extend(from.with_col(wing.king_target_col()));
                }
            }
        }

        if self.forbid_self_check {
            let side = piece.side();
            moves.retain(|&to| !crate::rules::king_in_check(&self.trial_grid(from, to), side));
        }

        moves
    }

    /// Applies a move for the side to move, returning `true` if it was accepted.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Applies a move for the side to move.
    ///
    /// On success the side to move flips. On failure the board is unchanged.
    ///
    /// # Errors
    ///
    /// - [`MoveError::EmptySource`] if `from` is empty
    /// - [`MoveError::WrongSide`] if the piece on `from` is not the mover's
    /// - [`MoveError::IllegalDestination`] if `to` is not in [`legal_moves`](Self::legal_moves)
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<MoveRecord, MoveError> {
        let piece = match self.validate(from, to) {
            Ok(piece) => piece,
            Err(err) => {
                tracing::trace!("rejected move from {} to {}: {}", from, to, err);
                return Err(err);
            }
        };
        let side = piece.side();

        let record = if piece.kind() == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
            let wing = Wing::from_king_move(from.col(), to.col());
            self.perform_castle(side, wing)?;
            self.castling.mark_king_moved(side);
            self.castling.mark_rook_moved(side, wing);
            self.en_passant = None;
            MoveRecord {
                side,
                from,
                to,
                kind: MoveKind::Castle(wing),
                captured: None,
            }
        } else {
            self.apply_ordinary(piece, to)
        };

        self.side_to_move = side.opposite();
        tracing::debug!("{} played {}", side, record);
        Ok(record)
    }

    /// Checks that the side to move owns the piece on `from` and that `to`
    /// is among its legal moves.
    fn validate(&self, from: Coord, to: Coord) -> Result<Piece, MoveError> {
        let piece = *self.grid.get(from).ok_or(MoveError::EmptySource(from))?;
        if piece.side() != self.side_to_move {
            return Err(MoveError::WrongSide {
                coord: from,
                owner: piece.side(),
                to_move: self.side_to_move,
            });
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// The en-passant target, if `pawn` stands diagonally behind it and the
    /// cell beside the pawn holds an opposing pawn to capture.
    fn en_passant_capture(&self, pawn: &Piece) -> Option<Coord> {
        let target = self.en_passant?;
        let from = pawn.coord();
        let (d_row, d_col) = (
            target.row() as i8 - from.row() as i8,
            target.col() as i8 - from.col() as i8,
        );
        if d_row != pawn.side().pawn_direction() || d_col.abs() != 1 {
            return None;
        }
        if self.grid.is_occupied(target) {
            return None;
        }
        let victim = self.grid.get(from.with_col(target.col())?)?;
        (victim.kind() == PieceKind::Pawn && victim.side() != pawn.side()).then_some(target)
    }

    /// Moves `piece` to `to`, handling en passant, castling flags, and the
    /// en-passant target. The move has already been validated.
    fn apply_ordinary(&mut self, piece: Piece, to: Coord) -> MoveRecord {
        let from = piece.coord();
        let side = piece.side();
        let mut kind = MoveKind::Quiet;
        let mut captured = None;

        if piece.kind() == PieceKind::Pawn
            && from.col() != to.col()
            && !self.grid.is_occupied(to)
            && self.en_passant == Some(to)
        {
            if let Some(victim) = Coord::new(from.row(), to.col()) {
                captured = self.grid.take(victim).map(|p| p.descriptor());
                tracing::debug!("en passant capture, removed pawn on {}", victim);
            }
            kind = MoveKind::EnPassant;
        }

        match piece.kind() {
            PieceKind::King => self.castling.mark_king_moved(side),
            PieceKind::Rook => self.castling.mark_rook_origin(from),
            _ => {}
        }

        if let Some(victim) = self.grid.relocate(from, to) {
            captured = Some(victim.descriptor());
            kind = MoveKind::Capture;
            self.castling.mark_rook_origin(to);
        }
        if let Some(moved) = self.grid.get_mut(to) {
            moved.set_moved(true);
        }

        self.en_passant = None;
        if piece.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            self.en_passant = from.offset(side.pawn_direction(), 0);
            kind = MoveKind::DoubleStep;
            if let Some(target) = self.en_passant {
                tracing::debug!("en passant target set on {}", target);
            }
        }

        MoveRecord {
            side,
            from,
            to,
            kind,
            captured,
        }
    }

    /// A copy of the grid with the move from `from` to `to` played out,
    /// including the pawn removed by en passant and the rook moved by castling.
    fn trial_grid(&self, from: Coord, to: Coord) -> Grid {
        let mut trial = self.grid;
        if let Some(piece) = self.grid.get(from) {
            match piece.kind() {
                PieceKind::Pawn if from.col() != to.col() && !trial.is_occupied(to) => {
                    if let Some(victim) = Coord::new(from.row(), to.col()) {
                        trial.take(victim);
                    }
                }
                PieceKind::King if from.col().abs_diff(to.col()) == 2 => {
                    let wing = Wing::from_king_move(from.col(), to.col());
                    if let (Some(rook_from), Some(rook_to)) = (
                        wing.rook_origin(piece.side()),
                        from.with_col(wing.rook_target_col()),
                    ) {
                        trial.relocate(rook_from, rook_to);
                    }
                }
                _ => {}
            }
        }
        trial.relocate(from, to);
        trial
    }
}

impl fmt::Display for Board {
    /// Draws the board as eight rows of symbols, row 0 first, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let symbol = Coord::new(row, col)
                    .and_then(|c| self.piece_at(c))
                    .map_or('.', PieceDescriptor::symbol);
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn board(placement: &str, side: Side) -> Board {
        Board::from_layout(&Layout::parse(placement).unwrap(), side)
    }

    #[test]
    fn new_board() {
        let board = Board::new();
        assert_eq!(board.side_to_move(), Side::White);
        assert_eq!(board.selection(), None);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.castling_rights(), CastlingRights::NONE_MOVED);
        assert_eq!(board.to_placement(), Layout::STANDARD);
    }

    #[test]
    fn get_piece_bounds() {
        let board = Board::new();
        assert_eq!(
            board.get_piece(7, 4),
            Some(PieceDescriptor {
                kind: PieceKind::King,
                side: Side::White
            })
        );
        assert_eq!(board.get_piece(4, 4), None);
        assert_eq!(board.get_piece(-1, 4), None);
        assert_eq!(board.get_piece(0, 8), None);
    }

    #[test]
    fn layout_derives_castling_flags() {
        let board = board("4k3/8/8/8/8/8/8/R3K3", Side::White);
        let rights = board.castling_rights();
        assert!(rights.is_available(Side::White, Wing::QueenSide));
        assert!(!rights.is_available(Side::White, Wing::KingSide));
        assert!(!rights.is_available(Side::Black, Wing::KingSide));
        assert!(rights.rook_moved(Side::Black, Wing::QueenSide));
        assert!(!rights.king_moved(Side::Black));
    }

    #[test]
    fn opening_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves(at(6, 4)), vec![at(4, 4), at(5, 4)]);
        assert_eq!(board.legal_moves(at(7, 6)), vec![at(5, 5), at(5, 7)]);
        assert!(board.legal_moves(at(7, 4)).is_empty());
        assert!(board.legal_moves(at(4, 4)).is_empty());
    }

    #[test]
    fn double_step_sets_and_next_move_clears_target() {
        let mut board = Board::new();
        let record = board.try_move(at(6, 4), at(4, 4)).unwrap();
        assert_eq!(record.kind, MoveKind::DoubleStep);
        assert_eq!(board.en_passant_target(), Some(at(5, 4)));

        board.try_move(at(0, 6), at(2, 5)).unwrap();
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn rejected_moves_leave_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        assert_eq!(
            board.try_move(at(4, 4), at(3, 4)),
            Err(MoveError::EmptySource(at(4, 4)))
        );
        assert!(matches!(
            board.try_move(at(1, 4), at(3, 4)),
            Err(MoveError::WrongSide { .. })
        ));
        assert_eq!(
            board.try_move(at(6, 4), at(3, 4)),
            Err(MoveError::IllegalDestination {
                from: at(6, 4),
                to: at(3, 4)
            })
        );
        assert!(!board.attempt_move(at(7, 0), at(5, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn capture_records_victim() {
        let mut board = board("4k3/8/8/3p4/4P3/8/8/4K3", Side::White);
        let record = board.try_move(at(4, 4), at(3, 3)).unwrap();
        assert_eq!(record.kind, MoveKind::Capture);
        assert_eq!(
            record.captured,
            Some(PieceDescriptor {
                kind: PieceKind::Pawn,
                side: Side::Black
            })
        );
        assert_eq!(board.grid().pieces().count(), 3);
        assert_eq!(board.grid().get(at(3, 3)).unwrap().coord(), at(3, 3));
    }

    #[test]
    fn diagonal_onto_empty_needs_target() {
        let board = board("4k3/8/8/3pP3/8/8/8/4K3", Side::White);
        assert_eq!(board.legal_moves(at(3, 4)), vec![at(2, 4)]);
    }

    #[test]
    fn en_passant_is_offered_for_one_move_only() {
        let mut board = board("4k3/3p4/8/4P3/8/8/8/4K3", Side::Black);
        board.try_move(at(1, 3), at(3, 3)).unwrap();
        assert_eq!(board.legal_moves(at(3, 4)), vec![at(2, 4), at(2, 3)]);

        let record = board.try_move(at(3, 4), at(2, 3)).unwrap();
        assert_eq!(record.kind, MoveKind::EnPassant);
        assert!(record.is_capture());
        assert_eq!(board.piece_at(at(3, 3)), None);
        assert_eq!(board.grid().pieces().count(), 3);
    }

    #[test]
    fn en_passant_expires() {
        let mut board = board("4k3/3p4/8/4P3/8/8/8/4K3", Side::Black);
        board.try_move(at(1, 3), at(3, 3)).unwrap();
        board.try_move(at(7, 4), at(7, 3)).unwrap();
        board.try_move(at(0, 4), at(0, 3)).unwrap();
        assert_eq!(board.legal_moves(at(3, 4)), vec![at(2, 4)]);
    }

    #[test]
    fn rook_move_and_rook_capture_update_flags() {
        let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R", Side::White);
        board.try_move(at(7, 7), at(0, 7)).unwrap();
        let rights = board.castling_rights();
        assert!(rights.rook_moved(Side::White, Wing::KingSide));
        assert!(rights.rook_moved(Side::Black, Wing::KingSide));
        assert!(!rights.rook_moved(Side::White, Wing::QueenSide));
        assert!(!rights.king_moved(Side::White));
    }

    #[test]
    fn self_check_is_allowed_by_default() {
        // The e-file rook pins the bishop to its king.
        let board = board("4r1k1/8/8/8/8/8/4B3/4K3", Side::White);
        assert!(!board.legal_moves(at(6, 4)).is_empty());
    }

    #[test]
    fn self_check_filter_drops_pinned_moves() {
        let config = EngineConfig {
            forbid_self_check: true,
            layout: Some("4r1k1/8/8/8/8/8/4B3/4K3".to_string()),
            ..EngineConfig::default()
        };
        let board = Board::with_config(&config).unwrap();
        assert!(board.legal_moves(at(6, 4)).is_empty());
        let king_moves = board.legal_moves(at(7, 4));
        assert!(king_moves.contains(&at(7, 3)));
        assert!(king_moves.contains(&at(6, 5)));
    }

    #[test]
    fn self_check_filter_sees_en_passant_removal() {
        // Taking en passant would empty the row between the rook and the king.
        let placement = "4k3/3p4/8/K3P2r/8/8/8/8";

        let mut open = board(placement, Side::Black);
        open.try_move(at(1, 3), at(3, 3)).unwrap();
        assert_eq!(open.legal_moves(at(3, 4)), vec![at(2, 4), at(2, 3)]);

        let config = EngineConfig {
            forbid_self_check: true,
            layout: Some(placement.to_string()),
            first_to_move: Side::Black,
        };
        let mut pinned = Board::with_config(&config).unwrap();
        pinned.try_move(at(1, 3), at(3, 3)).unwrap();
        assert_eq!(pinned.en_passant_target(), Some(at(2, 3)));
        assert_eq!(pinned.legal_moves(at(3, 4)), vec![at(2, 4)]);
        assert!(!pinned.attempt_move(at(3, 4), at(2, 3)));
    }

    #[test]
    fn self_check_filter_sees_castled_king() {
        // The b2 pawn only strikes c1 once a piece stands there.
        let placement = "r3k2r/8/8/8/8/8/1p6/R3K2R";

        let open = board(placement, Side::White);
        assert!(open.can_castle_queen_side(Side::White));
        assert!(open.legal_moves(at(7, 4)).contains(&at(7, 2)));

        let config = EngineConfig {
            forbid_self_check: true,
            layout: Some(placement.to_string()),
            ..EngineConfig::default()
        };
        let mut filtered = Board::with_config(&config).unwrap();
        let king_moves = filtered.legal_moves(at(7, 4));
        assert!(!king_moves.contains(&at(7, 2)));
        assert!(king_moves.contains(&at(7, 6)));

        let record = filtered.try_move(at(7, 4), at(7, 6)).unwrap();
        assert_eq!(record.kind, MoveKind::Castle(Wing::KingSide));
        assert!(!filtered.is_in_check(Side::White));
    }

    #[test]
    fn trial_grid_plays_out_special_moves() {
        let castling = board("r3k2r/8/8/8/8/8/8/R3K2R", Side::White);
        let trial = castling.trial_grid(at(7, 4), at(7, 6));
        assert_eq!(trial.get(at(7, 6)).map(|p| p.kind()), Some(PieceKind::King));
        assert_eq!(trial.get(at(7, 5)).map(|p| p.kind()), Some(PieceKind::Rook));
        assert_eq!(trial.get(at(7, 5)).map(|p| p.coord()), Some(at(7, 5)));
        assert!(trial.get(at(7, 7)).is_none());
        assert!(castling.piece_at(at(7, 7)).is_some());

        let mut passant = board("4k3/3p4/8/4P3/8/8/8/4K3", Side::Black);
        passant.try_move(at(1, 3), at(3, 3)).unwrap();
        let trial = passant.trial_grid(at(3, 4), at(2, 3));
        assert!(trial.get(at(3, 3)).is_none());
        assert_eq!(trial.get(at(2, 3)).map(|p| p.side()), Some(Side::White));
        assert!(passant.piece_at(at(3, 3)).is_some());
    }

    #[test]
    fn every_rejection_is_traced() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
            type Writer = Capture;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        let mut board = Board::new();
        tracing::subscriber::with_default(subscriber, || {
            assert!(!board.attempt_move(at(4, 4), at(3, 4)));
            assert!(!board.attempt_move(at(1, 4), at(3, 4)));
            assert!(!board.attempt_move(at(6, 4), at(3, 4)));
        });

        let text = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("no piece on e4"));
        assert!(text.contains("belongs to Black"));
        assert!(text.contains("illegal move from e2 to e5"));
    }

    #[test]
    fn display_draws_symbols() {
        let board = Board::new();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }
}
