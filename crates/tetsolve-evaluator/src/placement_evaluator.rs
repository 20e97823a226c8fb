//! Placement evaluation: scoring the field a placement leaves behind.
//!
//! An evaluator is a pure function of a [`Field`]. The search calls it on
//! scratch copies, so it must not depend on anything but the field it is
//! given.
//!
//! The stock evaluator, [`LinearPlacementEvaluator`], computes
//!
//! ```text
//! score = height * w_height + blockades * w_blockade + holes * w_hole
//! ```
//!
//! over the metrics of [`FieldAnalysis`]. With [`Weights::DEFAULT`] only
//! height is penalised; holes and blockades are computed but weighted zero.
//!
//! # Example
//!
//! ```
//! use tetsolve_engine::{Field, PieceKind};
//! use tetsolve_evaluator::placement_evaluator::{
//!     LinearPlacementEvaluator, PlacementEvaluator, Weights,
//! };
//!
//! let evaluator = LinearPlacementEvaluator::new(Weights::DEFAULT);
//! let mut field = Field::new(11, 10);
//! assert_eq!(evaluator.evaluate(&field), 0);
//!
//! field.place(PieceKind::I, PieceKind::I.rotation(0), 0);
//! assert_eq!(evaluator.evaluate(&field), 4 * -380);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tetsolve_engine::Field;

use crate::field_analysis::FieldAnalysis;

/// Scores a field. Higher is better.
pub trait PlacementEvaluator: fmt::Debug + Send + Sync {
    fn evaluate(&self, field: &Field) -> i64;
}

/// Coefficients of [`LinearPlacementEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub height: i64,
    pub blockade: i64,
    pub hole: i64,
}

impl Weights {
    pub const DEFAULT: Self = Self {
        height: -380,
        blockade: 0,
        hole: 0,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Weighted sum of height, blockade and hole counts.
#[derive(Debug, Clone)]
pub struct LinearPlacementEvaluator {
    weights: Weights,
}

impl Default for LinearPlacementEvaluator {
    fn default() -> Self {
        Self::new(Weights::DEFAULT)
    }
}

impl LinearPlacementEvaluator {
    #[must_use]
    pub const fn new(weights: Weights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }
}

impl PlacementEvaluator for LinearPlacementEvaluator {
    #[inline]
    fn evaluate(&self, field: &Field) -> i64 {
        let analysis = FieldAnalysis::new(field);
        let Weights {
            height,
            blockade,
            hole,
        } = self.weights;

        let mut score = count_to_i64(analysis.height()) * height;
        // skip the pattern scan entirely when it cannot contribute
        if blockade != 0 || hole != 0 {
            score += count_to_i64(analysis.blockades()) * blockade;
            score += count_to_i64(analysis.holes()) * hole;
        }
        score
    }
}

fn count_to_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
