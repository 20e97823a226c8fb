//! Property tests for complete runs.

use proptest::prelude::*;
use tetsolve_engine::{PieceKind, PieceSequence, SolverConfig};
use tetsolve_evaluator::{
    placement_evaluator::{LinearPlacementEvaluator, PlacementEvaluator},
    sequencer::Sequencer,
};

fn piece_sequence() -> impl Strategy<Value = PieceSequence> {
    prop::collection::vec(prop::sample::select(PieceKind::ALL.to_vec()), 0..60)
        .prop_map(PieceSequence::from_iter)
}

proptest! {
    #[test]
    fn one_move_per_piece_with_valid_triples(
        pieces in piece_sequence(),
        width in 4usize..=16,
        buffer_size in 0usize..4,
    ) {
        let config = SolverConfig { width, buffer_size };
        let outcome = Sequencer::new(config, pieces.len()).unwrap().run(pieces.as_slice());

        prop_assert_eq!(outcome.moves().len(), pieces.len());
        for mv in outcome.moves() {
            let geometry = mv.kind().geometry(mv.rotation());
            prop_assert!(mv.rotation().index() < mv.kind().rotation_count());
            prop_assert!(mv.column() + geometry.width() <= width);
        }

        let mut expected: Vec<_> = pieces.as_slice().iter().map(|k| k.id()).collect();
        let mut played: Vec<_> = outcome.moves().iter().map(|mv| mv.kind().id()).collect();
        expected.sort_unstable();
        played.sort_unstable();
        prop_assert_eq!(played, expected);
    }

    #[test]
    fn final_field_conserves_cells(
        pieces in piece_sequence(),
        width in 4usize..=12,
        buffer_size in 0usize..3,
    ) {
        let config = SolverConfig { width, buffer_size };
        let outcome = Sequencer::new(config, pieces.len()).unwrap().run(pieces.as_slice());
        let lines = outcome.stats().total_cleared_lines();
        prop_assert_eq!(outcome.field().occupied_cells(), 4 * pieces.len() - width * lines);
    }

    #[test]
    fn replaying_the_log_reproduces_the_field(
        pieces in piece_sequence(),
        buffer_size in 0usize..3,
    ) {
        let config = SolverConfig {
            width: 11,
            buffer_size,
        };
        let outcome = Sequencer::new(config, pieces.len()).unwrap().run(pieces.as_slice());

        let mut field = tetsolve_engine::Field::new(11, config.height_bound(pieces.len()));
        for mv in outcome.moves() {
            field.place(mv.kind(), mv.rotation(), mv.column());
        }
        prop_assert_eq!(&field, outcome.field());

        let evaluator = LinearPlacementEvaluator::default();
        prop_assert_eq!(evaluator.evaluate(&field), evaluator.evaluate(outcome.field()));
    }
}
