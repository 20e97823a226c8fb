//! The rayon search must pick exactly what the sequential search picks.

#![cfg(feature = "parallel")]

use proptest::prelude::*;
use tetsolve_engine::{Field, PieceKind};
use tetsolve_evaluator::{
    placement_evaluator::{LinearPlacementEvaluator, Weights},
    placement_search::PlacementSearch,
};

fn piece_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn placements() -> impl Strategy<Value = Vec<(PieceKind, usize, usize)>> {
    prop::collection::vec((piece_kind(), 0usize..4, 0usize..16), 0..40)
}

fn weights() -> impl Strategy<Value = Weights> {
    prop_oneof![
        Just(Weights::DEFAULT),
        (-500i64..=0, -100i64..=0, -100i64..=0).prop_map(|(height, blockade, hole)| Weights {
            height,
            blockade,
            hole,
        }),
    ]
}

proptest! {
    #[test]
    fn parallel_search_matches_sequential(
        width in 4usize..=16,
        placements in placements(),
        candidates in prop::collection::vec(piece_kind(), 0..5),
        weights in weights(),
    ) {
        let mut field = Field::new(width, placements.len() * 4 / width);
        for (kind, rotation, column) in placements {
            field.place(kind, kind.rotation(rotation), column);
        }

        let search = PlacementSearch::new(Box::new(LinearPlacementEvaluator::new(weights)));
        prop_assert_eq!(
            search.select_best_parallel(&field, &candidates),
            search.select_best_sequential(&field, &candidates)
        );
    }
}
