//! Run-level state around the field.
//!
//! - [`LookaheadBuffer`] - Pieces held back for swapping against revealed pieces
//! - [`Move`] / [`MoveLog`] - Committed placements and their text rendering
//! - [`PieceSequence`] - Parsed input sequence, plus seeded generation via
//!   [`PieceGenerator`]
//! - [`SolveStats`] - Counters collected while moves are committed
//! - [`SolverConfig`] - Field width and buffer capacity for a run
//!
//! The control loop that drives these lives in the `tetsolve-evaluator` crate.

pub use self::{lookahead::*, moves::*, piece_sequence::*, solve_stats::*, solver_config::*};

mod lookahead;
mod moves;
mod piece_sequence;
mod solve_stats;
mod solver_config;
