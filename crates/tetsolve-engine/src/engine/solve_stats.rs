use serde::{Deserialize, Serialize};

/// Run statistics collected while pieces are committed.
///
/// - **Completed pieces**: number of committed moves
/// - **Cleared lines**: total and a histogram by lines cleared per placement
/// - **Peak stack height**: highest occupied row reached after any placement
///
/// # Example
///
/// ```
/// use tetsolve_engine::SolveStats;
///
/// let mut stats = SolveStats::new();
/// stats.complete_piece_drop(0, 2);
/// stats.complete_piece_drop(2, 1);
///
/// assert_eq!(stats.completed_pieces(), 2);
/// assert_eq!(stats.total_cleared_lines(), 2);
/// assert_eq!(stats.line_cleared_counter(), &[1, 0, 1, 0, 0]);
/// assert_eq!(stats.peak_stack_height(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
    peak_stack_height: usize,
}

impl SolveStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
            peak_stack_height: 0,
        }
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Histogram of placements by lines cleared.
    ///
    /// Index `n` counts placements that cleared `n` lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    #[must_use]
    pub const fn peak_stack_height(&self) -> usize {
        self.peak_stack_height
    }

    /// Records one committed placement.
    ///
    /// `stack_height` is the field's stack height after lines were cleared.
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize, stack_height: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        if stack_height > self.peak_stack_height {
            self.peak_stack_height = stack_height;
        }
    }
}
