//! Board diagram encoding and decoding.
//!
//! A diagram is a compact single-line notation for a full position: one
//! character per square (`.` empty, `p` player piece, `o` opponent piece),
//! rows separated by `/`, top row first. Parsing also derives both sides'
//! piece sets, so tests and benches can state a whole position as one
//! string.
//!
//! Example, an 8x8 board with a player piece on 20 and an opponent on 29:
//!
//! ```text
//! ........ / ........ / ....p... / .....o.. / ........ / ........ / ........ / ........
//! ```
//!
//! (shown with spaces for readability; the notation itself has none).

use crate::board::{Board, BoardError, Cell};

/// Errors that can occur during diagram parsing.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("diagram has no rows")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    UnevenRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A parsed position: the board plus both derived piece sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub player_pieces: Vec<usize>,
    pub opponent_pieces: Vec<usize>,
}

/// Parses a diagram string into a board and its piece sets.
pub fn parse_diagram(s: &str) -> Result<Position, DiagramError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DiagramError::Empty);
    }

    let rows: Vec<&str> = s.split('/').collect();
    let width = rows[0].chars().count();

    let mut cells = Vec::with_capacity(width * rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != width {
            return Err(DiagramError::UnevenRow {
                row: row_idx,
                expected: width,
                got,
            });
        }
        for c in row.chars() {
            cells.push(Cell::from_diagram_char(c).ok_or(DiagramError::InvalidCell(c))?);
        }
    }

    let board = Board::from_cells(width, cells)?;
    let player_pieces = board.positions_of(Cell::Player);
    let opponent_pieces = board.positions_of(Cell::Opponent);

    Ok(Position {
        board,
        player_pieces,
        opponent_pieces,
    })
}

/// Emits the diagram string for a board.
pub fn emit_diagram(board: &Board) -> String {
    let width = board.geometry().width;
    let mut out = String::with_capacity(board.len() + board.geometry().height);

    for (i, cell) in board.cells().iter().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('/');
        }
        out.push(cell.diagram_char());
    }

    out
}
