//! Candidate move generation and ranking.
//!
//! Enumerates forward moves and capturing jumps for the moving side,
//! scores each candidate (jumps are discounted by the opponent threat
//! against the landing square), and returns the top-ranked few.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Direction, ALL_DIRECTIONS};
use crate::eval::threat_score;

/// Maximum number of ranked candidates returned per evaluation.
pub const CANDIDATE_LIMIT: usize = 5;

/// Score of a plain forward move into an empty square.
pub const SIMPLE_SCORE: i32 = 1;

/// Base score of a capturing jump, before the threat discount.
pub const JUMP_BASE_SCORE: i32 = 10;

/// Whether a candidate relocates one step or captures by jumping two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Simple,
    Jump,
}

/// A scored candidate move. Immutable once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub from: usize,
    pub to: usize,
    /// Square of the captured opponent piece; `None` for simple moves.
    pub captured: Option<usize>,
    /// Jump scores may go negative when counter-threats pile up; the
    /// ranking contract is relative, so they are never clamped.
    pub score: i32,
}

/// Enumerates, scores, and ranks candidate moves for the moving side.
///
/// Candidates are generated per piece (in the order of `player_pieces`) and
/// per direction; the result is stable-sorted by score descending and
/// truncated to [`CANDIDATE_LIMIT`]. Ties keep generation order, so output
/// is deterministic for identical inputs.
///
/// Piece indices that do not address a `Player` cell yield no candidates;
/// they are never an error.
pub fn evaluate_moves(board: &Board, player_pieces: &[usize], opponent_pieces: &[usize]) -> Vec<Move> {
    let mut moves: Vec<Move> = player_pieces
        .iter()
        .flat_map(|&piece| piece_moves(piece, board, opponent_pieces))
        .collect();
    rank(&mut moves);
    moves
}

/// Parallel variant of [`evaluate_moves`].
///
/// Pieces are evaluated concurrently; per-piece buckets are merged back in
/// piece order before the stable sort, so the output is identical to the
/// sequential path.
pub fn evaluate_moves_parallel(
    board: &Board,
    player_pieces: &[usize],
    opponent_pieces: &[usize],
) -> Vec<Move> {
    use rayon::prelude::*;

    let buckets: Vec<Vec<Move>> = player_pieces
        .par_iter()
        .map(|&piece| piece_moves(piece, board, opponent_pieces))
        .collect();

    let mut moves: Vec<Move> = buckets.into_iter().flatten().collect();
    rank(&mut moves);
    moves
}

/// Picks one of the ranked candidates uniformly at random.
///
/// Returns `None` when no candidate exists. Useful as a weak baseline
/// opponent in self-play harnesses.
pub fn random_move(
    board: &Board,
    player_pieces: &[usize],
    opponent_pieces: &[usize],
    rng: &mut impl Rng,
) -> Option<Move> {
    let ranked = evaluate_moves(board, player_pieces, opponent_pieces);
    if ranked.is_empty() {
        return None;
    }
    Some(ranked[rng.gen_range(0..ranked.len())])
}

/// All candidates for one piece, in direction order.
fn piece_moves(piece: usize, board: &Board, opponent_pieces: &[usize]) -> Vec<Move> {
    // A piece-set entry that does not hold one of our pieces is silently
    // inert rather than an error.
    if board.cell(piece) != Some(Cell::Player) {
        return Vec::new();
    }

    let geometry = board.geometry();
    let mut moves = Vec::new();

    for dir in ALL_DIRECTIONS {
        if let Some(forward) = geometry.step(piece, dir) {
            if board.is_open(forward) {
                moves.push(Move {
                    kind: MoveKind::Simple,
                    from: piece,
                    to: forward,
                    captured: None,
                    score: SIMPLE_SCORE,
                });
            }
            if board.cell(forward) == Some(Cell::Opponent) {
                if let Some(landing) = jump_landing(piece, dir, board) {
                    let risk = threat_score(landing, opponent_pieces, board);
                    moves.push(Move {
                        kind: MoveKind::Jump,
                        from: piece,
                        to: landing,
                        captured: Some(forward),
                        score: JUMP_BASE_SCORE - risk,
                    });
                }
            }
        }
    }

    moves
}

/// The empty landing square two steps along `dir`, if any.
fn jump_landing(piece: usize, dir: Direction, board: &Board) -> Option<usize> {
    let landing = board.geometry().jump(piece, dir)?;
    if board.is_open(landing) {
        Some(landing)
    } else {
        None
    }
}

/// Stable sort by score descending, then truncate to the candidate limit.
fn rank(moves: &mut Vec<Move>) {
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(CANDIDATE_LIMIT);
}
