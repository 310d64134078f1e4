//! Draughtsman: candidate-move scoring for draughts-style boards.
//!
//! Exposes the board representation, the move generator, the opponent
//! threat estimator, and the diagram notation used by fixtures.

pub mod board;
pub mod eval;
pub mod movegen;
pub mod protocol;
