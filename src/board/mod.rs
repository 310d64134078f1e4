//! Board representation.
//!
//! Contains the cell occupancy states, the rectangular geometry with its
//! four diagonal directions, and the flat board state itself.

pub mod cell;
pub mod geometry;
pub mod state;

pub use cell::Cell;
pub use geometry::{Direction, Geometry, ALL_DIRECTIONS};
pub use state::{Board, BoardError};
