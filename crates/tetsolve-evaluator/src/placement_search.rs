//! Placement search: picking the best move among the candidate pieces.
//!
//! For every candidate piece, every rotation and every column, the search
//! drops the piece on a scratch copy of the field, scores the result and keeps
//! the best. The committed field is never touched.
//!
//! # Enumeration order and ties
//!
//! Triples are visited by candidate index, then rotation, then column, all
//! ascending. A later triple replaces the current best only with a strictly
//! higher score, so the first triple found wins ties. Columns past the right
//! wall are clamped when placed but recorded as requested; they always tie
//! with the wall column visited before them and therefore never win.
//!
//! # Usage
//!
//! ```
//! use tetsolve_engine::{Field, PieceKind};
//! use tetsolve_evaluator::{
//!     placement_evaluator::LinearPlacementEvaluator, placement_search::PlacementSearch,
//! };
//!
//! let search = PlacementSearch::new(Box::new(LinearPlacementEvaluator::default()));
//! let field = Field::new(11, 8);
//!
//! let outcome = search.select_best(&field, &[PieceKind::I, PieceKind::O]).unwrap();
//! // a flat I only adds one row
//! assert_eq!(outcome.placement().to_string(), "1 1 0");
//! assert_eq!(outcome.candidate_index(), 0);
//! assert_eq!(outcome.score(), -380);
//! ```

use tetsolve_engine::{Field, Move, PieceKind};

use crate::placement_evaluator::PlacementEvaluator;

/// Winning placement of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    placement: Move,
    candidate_index: usize,
    score: i64,
}

impl SearchOutcome {
    #[must_use]
    pub fn placement(&self) -> Move {
        self.placement
    }

    /// Position of the winning piece in the candidate list.
    #[must_use]
    pub fn candidate_index(&self) -> usize {
        self.candidate_index
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Exhaustive one-step search driven by a placement evaluator.
#[derive(Debug)]
pub struct PlacementSearch<'a> {
    placement_evaluator: Box<dyn PlacementEvaluator + 'a>,
}

impl<'a> PlacementSearch<'a> {
    #[must_use]
    pub fn new(placement_evaluator: Box<dyn PlacementEvaluator + 'a>) -> Self {
        Self {
            placement_evaluator,
        }
    }

    /// Selects the best placement among `candidates`.
    ///
    /// Returns `None` only when `candidates` is empty.
    #[must_use]
    pub fn select_best(&self, field: &Field, candidates: &[PieceKind]) -> Option<SearchOutcome> {
        #[cfg(feature = "parallel")]
        let best = self.select_best_parallel(field, candidates);
        #[cfg(not(feature = "parallel"))]
        let best = self.select_best_sequential(field, candidates);

        if let Some(best) = &best {
            tracing::trace!(
                placement = %best.placement,
                candidate_index = best.candidate_index,
                score = best.score,
                "search winner"
            );
        }
        best
    }

    /// Scores every triple in enumeration order on one scratch field.
    #[must_use]
    pub fn select_best_sequential(
        &self,
        field: &Field,
        candidates: &[PieceKind],
    ) -> Option<SearchOutcome> {
        let mut scratch = field.clone();
        let mut best: Option<SearchOutcome> = None;

        for (candidate_index, placement) in enumerate_placements(field, candidates) {
            let score = self.score_placement(&mut scratch, field, placement);
            if best.is_none_or(|best| score > best.score) {
                best = Some(SearchOutcome {
                    placement,
                    candidate_index,
                    score,
                });
            }
        }

        best
    }

    /// Scores every triple across the rayon pool.
    ///
    /// Each worker keeps its own scratch field. Results are reduced by highest
    /// score, then lowest enumeration position, which yields the same outcome
    /// as [`Self::select_best_sequential`].
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn select_best_parallel(
        &self,
        field: &Field,
        candidates: &[PieceKind],
    ) -> Option<SearchOutcome> {
        use rayon::prelude::*;

        let placements: Vec<_> = enumerate_placements(field, candidates).collect();
        placements
            .par_iter()
            .enumerate()
            .map_init(
                || field.clone(),
                |scratch, (ordinal, &(candidate_index, placement))| {
                    let score = self.score_placement(scratch, field, placement);
                    let outcome = SearchOutcome {
                        placement,
                        candidate_index,
                        score,
                    };
                    (ordinal, outcome)
                },
            )
            .max_by(|(a_ord, a), (b_ord, b)| a.score.cmp(&b.score).then(b_ord.cmp(a_ord)))
            .map(|(_ordinal, outcome)| outcome)
    }

    fn score_placement(&self, scratch: &mut Field, field: &Field, placement: Move) -> i64 {
        scratch.place(placement.kind(), placement.rotation(), placement.column());
        let score = self.placement_evaluator.evaluate(scratch);
        scratch.restore(field);
        score
    }
}

fn enumerate_placements<'c>(
    field: &Field,
    candidates: &'c [PieceKind],
) -> impl Iterator<Item = (usize, Move)> + use<'c> {
    let width = field.width();
    candidates
        .iter()
        .copied()
        .enumerate()
        .flat_map(move |(candidate_index, kind)| {
            kind.rotations().into_iter().flat_map(move |rotation| {
                (0..width).map(move |column| (candidate_index, Move::new(kind, rotation, column)))
            })
        })
}
