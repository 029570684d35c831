//! Core types for the grid-chess rules engine.
//!
//! This crate provides the value types shared by the engine and any
//! presentation layer built on top of it:
//! - [`Side`] and [`PieceKind`] for piece identity
//! - [`Coord`] for grid cells
//! - [`Layout`] for placement-string parsing

mod coord;
mod kind;
mod layout;
mod side;

pub use coord::{Coord, CoordError, BOARD_SIZE};
pub use kind::PieceKind;
pub use layout::{Layout, LayoutError, Placement};
pub use side::Side;
