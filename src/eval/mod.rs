//! Heuristic evaluation.
//!
//! Currently limited to opponent threat estimation against a single square.

pub mod threat;

pub use threat::{threat_score, ADJACENT_THREAT, JUMP_THREAT};
