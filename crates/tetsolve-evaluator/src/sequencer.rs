//! The control loop that turns a piece sequence into a move log.
//!
//! A run moves through three phases:
//!
//! 1. **Prime** - the lookahead buffer is filled from the head of the sequence.
//! 2. **Steady state** - each remaining piece is revealed and competes with
//!    the buffered pieces. The winner is committed. When a buffered piece
//!    wins, the revealed piece takes its slot.
//! 3. **Drain** - buffered pieces are committed slot by slot. For slot `j`
//!    only slots `j..` compete; when a later slot wins, it is swapped into
//!    slot `j` so that every piece is committed exactly once.
//!
//! # Example
//!
//! ```
//! use tetsolve_engine::{PieceSequence, SolverConfig};
//! use tetsolve_evaluator::sequencer::Sequencer;
//!
//! let pieces = PieceSequence::parse("1234567");
//! let outcome = Sequencer::new(SolverConfig::default(), pieces.len())?.run(pieces.as_slice());
//!
//! assert_eq!(outcome.moves().len(), 7);
//! assert_eq!(outcome.stats().completed_pieces(), 7);
//! # Ok::<(), tetsolve_engine::ConfigError>(())
//! ```

use tetsolve_engine::{
    ConfigError, Field, LookaheadBuffer, Move, MoveLog, PieceKind, SolveStats, SolverConfig,
};

use crate::{
    placement_evaluator::{LinearPlacementEvaluator, PlacementEvaluator},
    placement_search::{PlacementSearch, SearchOutcome},
};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    moves: MoveLog,
    field: Field,
    stats: SolveStats,
}

impl SolveOutcome {
    #[must_use]
    pub fn moves(&self) -> &MoveLog {
        &self.moves
    }

    /// The committed field after the last move.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    #[must_use]
    pub fn into_moves(self) -> MoveLog {
        self.moves
    }
}

/// Owns the committed field, the lookahead buffer and the move log of one run.
#[derive(Debug)]
pub struct Sequencer<'a> {
    search: PlacementSearch<'a>,
    field: Field,
    buffer: LookaheadBuffer,
    candidates: Vec<PieceKind>,
    moves: MoveLog,
    stats: SolveStats,
}

impl Sequencer<'static> {
    /// Creates a sequencer scoring with [`LinearPlacementEvaluator::default`].
    ///
    /// The field is sized for `piece_count` pieces.
    pub fn new(config: SolverConfig, piece_count: usize) -> Result<Self, ConfigError> {
        Self::with_evaluator(
            config,
            piece_count,
            Box::new(LinearPlacementEvaluator::default()),
        )
    }
}

impl<'a> Sequencer<'a> {
    pub fn with_evaluator(
        config: SolverConfig,
        piece_count: usize,
        placement_evaluator: Box<dyn PlacementEvaluator + 'a>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let height_bound = config.height_bound(piece_count);
        tracing::debug!(
            width = config.width,
            buffer_size = config.buffer_size,
            piece_count,
            height_bound,
            "sequencer initialised"
        );
        Ok(Self {
            search: PlacementSearch::new(placement_evaluator),
            field: Field::new(config.width, height_bound),
            buffer: LookaheadBuffer::new(config.buffer_size),
            candidates: Vec::with_capacity(config.buffer_size + 1),
            moves: MoveLog::with_capacity(piece_count),
            stats: SolveStats::new(),
        })
    }

    /// Processes every piece of `pieces` and returns the committed moves.
    ///
    /// Produces exactly one move per piece.
    #[must_use]
    pub fn run(mut self, pieces: &[PieceKind]) -> SolveOutcome {
        let primed = self.buffer.prime(pieces);

        for &revealed in &pieces[primed..] {
            self.candidates.clear();
            self.candidates.extend(self.buffer.candidates_with(revealed));
            let outcome = self.search_candidates();
            if let Some(slot) = outcome.candidate_index().checked_sub(1) {
                self.buffer.absorb(slot, revealed);
            }
            self.commit("steady", outcome.placement());
        }

        for slot in 0..self.buffer.len() {
            self.candidates.clear();
            self.candidates.extend_from_slice(&self.buffer.slots()[slot..]);
            let outcome = self.search_candidates();
            self.buffer.swap(slot, slot + outcome.candidate_index());
            self.commit("drain", outcome.placement());
        }

        tracing::info!(
            pieces = self.stats.completed_pieces(),
            cleared_lines = self.stats.total_cleared_lines(),
            peak_stack_height = self.stats.peak_stack_height(),
            final_stack_height = self.field.stack_height(),
            "run complete"
        );

        SolveOutcome {
            moves: self.moves,
            field: self.field,
            stats: self.stats,
        }
    }

    fn search_candidates(&self) -> SearchOutcome {
        self.search
            .select_best(&self.field, &self.candidates)
            .expect("candidate list should never be empty")
    }

    fn commit(&mut self, phase: &'static str, placement: Move) {
        let cleared = self
            .field
            .place(placement.kind(), placement.rotation(), placement.column());
        self.stats
            .complete_piece_drop(cleared, self.field.stack_height());
        self.moves.push(placement);
        tracing::debug!(
            phase,
            %placement,
            cleared,
            stack_height = self.field.stack_height(),
            "move committed"
        );
    }
}
