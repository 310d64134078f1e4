//! Text notation for positions.
//!
//! The diagram format is the fixture notation used by tests and benches;
//! the scoring core itself only ever sees the in-memory types.

pub mod diagram;

pub use diagram::{emit_diagram, parse_diagram, DiagramError, Position};
