//! Board geometry and diagonal directions.
//!
//! The external contract is a flat cell sequence, but all adjacency
//! arithmetic happens in row/column space. Raw linear-offset stepping
//! (`idx ± width ± 1`) lets an edge square "wrap" onto the far side of the
//! neighbouring row; computing the step as (row ± 1, col ± 1) and bounds-
//! checking both axes rejects those phantom moves.

use serde::{Deserialize, Serialize};

/// One of the four diagonal adjacency steps.
///
/// Enumeration order is the candidate generation order and therefore the
/// tie-break order for equally scored moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

impl Direction {
    /// Row and column deltas of one step in this direction.
    pub const fn deltas(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// The equivalent linear-index offset on a board of the given width.
    ///
    /// On width 8 these are the classic -9, -7, 7, 9 offsets. Provided for
    /// callers that think in flat indices; internal stepping never uses it.
    pub const fn offset(self, width: usize) -> i32 {
        let (dr, dc) = self.deltas();
        dr * width as i32 + dc
    }
}

/// Rectangular board shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub const fn new(width: usize, height: usize) -> Self {
        Geometry { width, height }
    }

    /// Total number of squares.
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `idx` addresses a square on this board.
    pub const fn contains(&self, idx: usize) -> bool {
        idx < self.len()
    }

    /// One diagonal step from `from`, or `None` if it leaves the board.
    pub fn step(&self, from: usize, dir: Direction) -> Option<usize> {
        self.offset_by(from, dir, 1)
    }

    /// Two diagonal steps from `from` (a jump landing), or `None` if it
    /// leaves the board.
    pub fn jump(&self, from: usize, dir: Direction) -> Option<usize> {
        self.offset_by(from, dir, 2)
    }

    fn offset_by(&self, from: usize, dir: Direction, steps: i32) -> Option<usize> {
        if !self.contains(from) {
            return None;
        }
        let (dr, dc) = dir.deltas();
        let row = (from / self.width) as i32 + dr * steps;
        let col = (from % self.width) as i32 + dc * steps;
        if row < 0 || row >= self.height as i32 || col < 0 || col >= self.width as i32 {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }
}
