//! Scoring and move selection for the placement solver.
//!
//! The crate is layered bottom-up:
//!
//! ```text
//! Sequencer (prime / steady state / drain over the whole sequence)
//!     ↓ uses
//! Placement Search (best triple among the candidate pieces)
//!     ↓ uses
//! Placement Evaluator (score of a single resulting field)
//! ```
//!
//! # Modules
//!
//! - [`field_analysis`] - Lazily computed height, hole and blockade counts
//! - [`placement_evaluator`] - The [`PlacementEvaluator`](placement_evaluator::PlacementEvaluator)
//!   trait and the weighted linear evaluator
//! - [`placement_search`] - Exhaustive search over (candidate, rotation, column)
//! - [`sequencer`] - The run loop that produces the move log
//!
//! # Features
//!
//! - `parallel` - evaluates the triples of one search on the rayon thread pool.
//!   Output is identical to the sequential search.

pub mod field_analysis;
pub mod placement_evaluator;
pub mod placement_search;
pub mod sequencer;
