//! Error types for move application and configuration.

use grid_chess_core::{Coord, LayoutError, Side};
use thiserror::Error;

use crate::Wing;

/// Why a move attempt was refused. A refused move never changes the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Coord),

    #[error("piece on {coord} belongs to {owner}, but {to_move} is to move")]
    WrongSide {
        coord: Coord,
        owner: Side,
        to_move: Side,
    },

    #[error("illegal move from {from} to {to}")]
    IllegalDestination { from: Coord, to: Coord },

    #[error("{side} cannot castle {wing}")]
    CastlingUnavailable { side: Side, wing: Wing },
}

/// Errors that can occur when loading or applying engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured starting layout is malformed.
    #[error("invalid starting layout: {0}")]
    Layout(#[from] LayoutError),
}
