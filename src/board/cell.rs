//! Cell occupancy states.
//!
//! Each square of the flat board holds exactly one `Cell` value. The
//! single-character abbreviations are the diagram notation used by the
//! `protocol` module and test fixtures.

use serde::{Deserialize, Serialize};

/// Occupancy of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player,
    Opponent,
}

impl Cell {
    /// Returns the single-character diagram abbreviation.
    pub const fn diagram_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'p',
            Cell::Opponent => 'o',
        }
    }

    /// Parses a cell from its single-character diagram abbreviation.
    pub fn from_diagram_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'p' => Some(Cell::Player),
            'o' => Some(Cell::Opponent),
            _ => None,
        }
    }

    /// Returns true if the square holds no piece.
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
