//! Flat board state.
//!
//! A `Board` is the caller-supplied flat cell sequence plus the geometry
//! needed to interpret it as a grid. Piece positions travel separately as
//! plain index slices; the board never verifies that a claimed piece index
//! actually holds that side's piece -- mismatches simply produce no
//! candidate moves downstream.

use super::cell::Cell;
use super::geometry::Geometry;

/// Errors raised when constructing a board from caller data.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board width must be at least 2, got {0}")]
    WidthTooSmall(usize),

    #[error("cell count {count} is not a multiple of width {width}")]
    RaggedRows { count: usize, width: usize },
}

/// A rectangular board stored as a flat row-major cell sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    geometry: Geometry,
}

impl Board {
    /// Creates a board from a flat row-major cell sequence.
    pub fn from_cells(width: usize, cells: Vec<Cell>) -> Result<Board, BoardError> {
        if width < 2 {
            return Err(BoardError::WidthTooSmall(width));
        }
        if cells.len() % width != 0 {
            return Err(BoardError::RaggedRows {
                count: cells.len(),
                width,
            });
        }
        let geometry = Geometry::new(width, cells.len() / width);
        Ok(Board { cells, geometry })
    }

    /// Creates an all-empty board of the given shape.
    pub fn empty(width: usize, height: usize) -> Result<Board, BoardError> {
        Board::from_cells(width, vec![Cell::Empty; width * height])
    }

    /// Places a piece on the board. Returns false if the square is out of
    /// range or already occupied.
    pub fn place(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get(idx) {
            Some(Cell::Empty) => {
                self.cells[idx] = cell;
                true
            }
            _ => false,
        }
    }

    /// The cell at `idx`, or `None` if out of range.
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Returns true if `idx` is on the board and empty.
    pub fn is_open(&self, idx: usize) -> bool {
        matches!(self.cells.get(idx), Some(Cell::Empty))
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The flat cell sequence, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Collects the indices currently holding the given cell value.
    pub fn positions_of(&self, cell: Cell) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| i)
            .collect()
    }
}
