//! Opponent threat estimation.
//!
//! Scores how exposed a square is to the opponent's immediate replies:
//! each opponent piece one diagonal step away counts as an adjacent threat,
//! and each opponent piece that could hop an empty intermediate square onto
//! the target counts as a jump threat. The result feeds back into jump
//! scoring in `movegen`.

use crate::board::{Board, ALL_DIRECTIONS};

/// Weight for an opponent piece directly adjacent to the square.
pub const ADJACENT_THREAT: i32 = 5;

/// Weight for an opponent piece able to jump onto the square.
pub const JUMP_THREAT: i32 = 10;

/// Accumulated threat against `pos` from the opponent's pieces.
///
/// Per opponent piece and direction at most one of the two rules fires,
/// adjacent-check first. Steps that leave the board contribute nothing.
/// The total is never negative and grows with the opponent piece count.
pub fn threat_score(pos: usize, opponent_pieces: &[usize], board: &Board) -> i32 {
    let geometry = board.geometry();
    let mut total = 0;

    for &piece in opponent_pieces {
        for dir in ALL_DIRECTIONS {
            let Some(adjacent) = geometry.step(piece, dir) else {
                continue;
            };
            if adjacent == pos {
                total += ADJACENT_THREAT;
            } else if board.is_open(adjacent) && geometry.step(adjacent, dir) == Some(pos) {
                total += JUMP_THREAT;
            }
        }
    }

    total
}
