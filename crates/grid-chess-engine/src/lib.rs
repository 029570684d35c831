//! Rules engine for chess on an 8x8 grid of owned pieces.
//!
//! This crate provides:
//! - [`Piece`] - a piece with its movement geometry
//! - [`Grid`] - the 8x8 grid that owns the pieces
//! - [`Board`] - authoritative game state: side to move, en passant,
//!   castling flags, selection, move application, check and checkmate
//! - [`EngineConfig`] - rule options and starting layout, loaded from TOML
//!
//! # Architecture
//!
//! Each piece answers one question: can it reach a cell by its movement
//! pattern, given the occupancy of the grid? The board layers the rules
//! that need history (en passant, castling) and whole-board knowledge
//! (check, checkmate) on top. Every operation is synchronous and runs to
//! completion; the board is the only thing that mutates the grid.
//!
//! # Example
//!
//! ```
//! use grid_chess_engine::{Board, GameStatus};
//! use grid_chess_core::{Coord, Side};
//!
//! let mut board = Board::new();
//! let e2 = Coord::from_algebraic("e2").unwrap();
//! let e4 = Coord::from_algebraic("e4").unwrap();
//!
//! assert!(board.legal_moves(e2).contains(&e4));
//! assert!(board.attempt_move(e2, e4));
//! assert_eq!(board.side_to_move(), Side::Black);
//! assert_eq!(board.status(), GameStatus::InProgress);
//! ```

mod board;
mod castling;
mod config;
mod error;
mod grid;
mod mov;
mod piece;
pub mod rules;

pub use board::{Board, SelectionOutcome};
pub use castling::{CastlingRights, Wing};
pub use config::EngineConfig;
pub use error::{ConfigError, MoveError};
pub use grid::Grid;
pub use mov::{MoveKind, MoveRecord};
pub use piece::{Piece, PieceDescriptor};
pub use rules::GameStatus;
