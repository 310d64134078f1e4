//! Scenario tests for the move scorer.
//!
//! Positions are stated as diagram strings (see `protocol::diagram`) and
//! checked against the documented scoring and ranking contract.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use draughtsman::board::{Board, Cell};
use draughtsman::eval::{threat_score, ADJACENT_THREAT};
use draughtsman::movegen::{
    evaluate_moves, evaluate_moves_parallel, Move, MoveKind, CANDIDATE_LIMIT, JUMP_BASE_SCORE,
    SIMPLE_SCORE,
};
use draughtsman::protocol::{parse_diagram, Position};

/// Lone player piece at 20 facing a single opponent at 29.
const LONE_EXCHANGE: &str =
    "......../......../....p.../.....o../......../......../......../........";

/// Player piece at 9 walled in by opponents with every landing blocked.
const WALLED_IN: &str =
    "o.o...../.p....../o.o...../...o..../......../......../......../........";

fn evaluate(pos: &Position) -> Vec<Move> {
    evaluate_moves(&pos.board, &pos.player_pieces, &pos.opponent_pieces)
}

#[test]
fn lone_exchange_ranks_jump_first() {
    let pos = parse_diagram(LONE_EXCHANGE).unwrap();
    let moves = evaluate(&pos);

    // The jump lands on 38, where the captured piece's square is adjacent:
    // threat 5, jump score 10 - 5 = 5. The three open diagonals score 1
    // each and keep generation order.
    assert_eq!(
        moves,
        vec![
            Move {
                kind: MoveKind::Jump,
                from: 20,
                to: 38,
                captured: Some(29),
                score: JUMP_BASE_SCORE - ADJACENT_THREAT,
            },
            Move { kind: MoveKind::Simple, from: 20, to: 11, captured: None, score: SIMPLE_SCORE },
            Move { kind: MoveKind::Simple, from: 20, to: 13, captured: None, score: SIMPLE_SCORE },
            Move { kind: MoveKind::Simple, from: 20, to: 27, captured: None, score: SIMPLE_SCORE },
        ]
    );
}

#[test]
fn lone_exchange_threat_value() {
    let pos = parse_diagram(LONE_EXCHANGE).unwrap();
    assert_eq!(
        threat_score(38, &pos.opponent_pieces, &pos.board),
        ADJACENT_THREAT
    );
}

#[test]
fn no_pieces_no_candidates() {
    let board = Board::empty(8, 8).unwrap();
    assert!(evaluate_moves(&board, &[], &[]).is_empty());
}

#[test]
fn walled_in_piece_has_no_moves() {
    let pos = parse_diagram(WALLED_IN).unwrap();
    assert_eq!(pos.player_pieces, vec![9]);
    assert!(evaluate(&pos).is_empty());
}

#[test]
fn evaluation_is_deterministic() {
    let pos = parse_diagram(LONE_EXCHANGE).unwrap();
    let first = evaluate(&pos);
    for _ in 0..10 {
        assert_eq!(evaluate(&pos), first);
    }
}

#[test]
fn five_candidates_when_at_least_five_exist() {
    // Two far-apart interior pieces: eight simple moves available.
    let pos =
        parse_diagram("......../..p...../......../......../.....p../......../......../........")
            .unwrap();
    let moves = evaluate(&pos);
    assert_eq!(moves.len(), CANDIDATE_LIMIT);
    assert!(moves.iter().all(|m| m.score == SIMPLE_SCORE));
}

#[test]
fn ranked_list_is_sorted_non_increasing() {
    let pos =
        parse_diagram("......../..p.p.../...o..../..o.o.../......../.p..p.../......../........")
            .unwrap();
    let moves = evaluate(&pos);
    assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn parallel_and_sequential_agree_on_fixtures() {
    for diagram in [
        LONE_EXCHANGE,
        WALLED_IN,
        "......../..p.p.../...o..../..o.o.../......../.p..p.../......../........",
    ] {
        let pos = parse_diagram(diagram).unwrap();
        assert_eq!(
            evaluate(&pos),
            evaluate_moves_parallel(&pos.board, &pos.player_pieces, &pos.opponent_pieces),
        );
    }
}

#[test]
fn threat_score_monotonic_under_added_threats() {
    let pos = parse_diagram(LONE_EXCHANGE).unwrap();
    let base = threat_score(38, &pos.opponent_pieces, &pos.board);

    // Add an opponent on 45, adjacent to 38.
    let mut board = pos.board.clone();
    assert!(board.place(45, Cell::Opponent));
    let mut opponents = pos.opponent_pieces.clone();
    opponents.push(45);

    assert!(threat_score(38, &opponents, &board) >= base);
}

#[test]
fn best_move_serializes_with_expected_fields() {
    let pos = parse_diagram(LONE_EXCHANGE).unwrap();
    let best = evaluate(&pos)[0];

    let json = serde_json::to_value(best).unwrap();
    assert_eq!(json["kind"], "Jump");
    assert_eq!(json["from"], 20);
    assert_eq!(json["to"], 38);
    assert_eq!(json["captured"], 29);
    assert_eq!(json["score"], 5);

    let back: Move = serde_json::from_value(json).unwrap();
    assert_eq!(back, best);
}

/// Places `n` pieces of each side on random distinct squares.
fn random_position(rng: &mut StdRng, n: usize) -> Position {
    let mut board = Board::empty(8, 8).unwrap();
    let mut player_pieces = Vec::new();
    let mut opponent_pieces = Vec::new();

    while player_pieces.len() < n {
        let idx = rng.gen_range(0..64);
        if board.place(idx, Cell::Player) {
            player_pieces.push(idx);
        }
    }
    while opponent_pieces.len() < n {
        let idx = rng.gen_range(0..64);
        if board.place(idx, Cell::Opponent) {
            opponent_pieces.push(idx);
        }
    }

    Position {
        board,
        player_pieces,
        opponent_pieces,
    }
}

/// Row/column displacement between two flat indices.
fn displacement(from: usize, to: usize, width: usize) -> (i32, i32) {
    let dr = (to / width) as i32 - (from / width) as i32;
    let dc = (to % width) as i32 - (from % width) as i32;
    (dr, dc)
}

#[test]
fn randomized_positions_respect_the_contract() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pos = random_position(&mut rng, 4);
        let moves = evaluate(&pos);

        assert!(moves.len() <= CANDIDATE_LIMIT);
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));

        for m in &moves {
            assert_eq!(pos.board.cell(m.to), Some(Cell::Empty));
            let (dr, dc) = displacement(m.from, m.to, 8);
            match m.kind {
                MoveKind::Simple => {
                    assert_eq!(m.score, SIMPLE_SCORE);
                    assert_eq!(m.captured, None);
                    assert_eq!((dr.abs(), dc.abs()), (1, 1));
                }
                MoveKind::Jump => {
                    assert_eq!((dr.abs(), dc.abs()), (2, 2));
                    let captured = m.captured.unwrap();
                    assert_eq!(pos.board.cell(captured), Some(Cell::Opponent));
                    // The captured square is the midpoint of the jump.
                    let (cr, cc) = displacement(m.from, captured, 8);
                    assert_eq!((cr * 2, cc * 2), (dr, dc));
                    let risk = threat_score(m.to, &pos.opponent_pieces, &pos.board);
                    assert_eq!(m.score, JUMP_BASE_SCORE - risk);
                }
            }
        }

        // Both evaluation paths agree on every random position.
        assert_eq!(
            moves,
            evaluate_moves_parallel(&pos.board, &pos.player_pieces, &pos.opponent_pieces),
        );
    }
}
