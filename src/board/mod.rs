//! Board representation.
//!
//! Contains the core data structures for players, cells, coordinates,
//! and the grid itself.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Player, Point, ALL_PLAYERS, ALL_POINTS, CELL_COUNT, GRID_SIZE};
pub use grid::Grid;
