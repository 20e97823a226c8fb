//! Complete runs pinned to recorded move logs.
//!
//! The logs were produced at width 11 with a buffer of one piece. Any change
//! to shape geometry, enumeration order or tie-breaking shows up here as the
//! first move that differs.

use tetsolve_engine::{PieceSequence, SolverConfig};
use tetsolve_evaluator::{
    placement_evaluator::{LinearPlacementEvaluator, Weights},
    sequencer::{Sequencer, SolveOutcome},
};

fn render(outcome: &SolveOutcome) -> String {
    let mut out = Vec::new();
    outcome.moves().write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn assert_same_moves(actual: &str, expected: &str) {
    let actual: Vec<_> = actual.lines().collect();
    let expected: Vec<_> = expected.lines().collect();
    if let Some(index) = actual.iter().zip(&expected).position(|(a, e)| a != e) {
        panic!(
            "move {index} differs: got {:?}, expected {:?}",
            actual[index], expected[index]
        );
    }
    assert_eq!(actual.len(), expected.len());
}

#[test]
fn default_weights_match_recorded_log() {
    let pieces = PieceSequence::parse(include_str!("fixtures/pieces_420.txt"));
    assert_eq!(pieces.len(), 420);

    let outcome = Sequencer::new(SolverConfig::default(), pieces.len())
        .unwrap()
        .run(pieces.as_slice());

    assert_same_moves(&render(&outcome), include_str!("fixtures/moves_420.txt"));
    assert_eq!(outcome.stats().completed_pieces(), 420);
}

#[test]
fn hole_and_blockade_weights_match_recorded_log() {
    let pieces = PieceSequence::parse(include_str!("fixtures/pieces_300.txt"));
    assert_eq!(pieces.len(), 300);

    let weights = Weights {
        height: -380,
        blockade: -37,
        hole: -91,
    };
    let outcome = Sequencer::with_evaluator(
        SolverConfig::default(),
        pieces.len(),
        Box::new(LinearPlacementEvaluator::new(weights)),
    )
    .unwrap()
    .run(pieces.as_slice());

    assert_same_moves(
        &render(&outcome),
        include_str!("fixtures/moves_300_weighted.txt"),
    );
}

#[test]
fn hole_and_blockade_weights_change_the_log() {
    let pieces = PieceSequence::parse(include_str!("fixtures/pieces_300.txt"));
    let outcome = Sequencer::new(SolverConfig::default(), pieces.len())
        .unwrap()
        .run(pieces.as_slice());

    assert_ne!(
        render(&outcome),
        include_str!("fixtures/moves_300_weighted.txt")
    );
}
