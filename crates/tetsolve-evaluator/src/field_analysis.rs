//! Lazily computed metrics over a field.
//!
//! Each metric is computed on first access and cached for the lifetime of the
//! [`FieldAnalysis`], so an evaluator that only weights some metrics never pays
//! for the others.
//!
//! # Hole and blockade rules
//!
//! A hole is an empty-looking cell recognised by a fixed neighbour pattern,
//! checked for every row `y` below the top row:
//!
//! | Column            | Pattern                                                        |
//! |-------------------|----------------------------------------------------------------|
//! | `0`               | `(1, y)` and `(0, y + 1)` occupied, `(0, y)` empty             |
//! | `1..width - 1`    | `(x - 1, y)`, `(x, y + 1)` and `(x + 1, y)` occupied, `(x, y)` empty |
//! | `width - 1`       | `(width - 2, y)`, `(width - 1, y + 1)` and `(width - 1, y)` occupied |
//!
//! The right-edge pattern tests an occupied cell rather than an empty one.
//! For every hole found, blockades are counted by walking up column `0` from
//! `y + 1` while cells stay occupied, whichever column the hole was found in.

use std::cell::OnceCell;

use tetsolve_engine::Field;

#[derive(Debug)]
pub struct FieldAnalysis<'a> {
    field: &'a Field,
    height: OnceCell<usize>,
    holes_and_blockades: OnceCell<(usize, usize)>,
}

impl<'a> FieldAnalysis<'a> {
    #[must_use]
    pub fn new(field: &'a Field) -> Self {
        Self {
            field,
            height: OnceCell::new(),
            holes_and_blockades: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Number of non-empty rows counted upward from the floor until the first
    /// empty row.
    ///
    /// Unlike [`Field::stack_height`], an empty row below occupied cells ends
    /// the count.
    #[must_use]
    pub fn height(&self) -> usize {
        *self.height.get_or_init(|| {
            self.field
                .rows()
                .take_while(|row| !row.is_empty())
                .count()
        })
    }

    #[must_use]
    pub fn holes(&self) -> usize {
        self.holes_and_blockades().0
    }

    #[must_use]
    pub fn blockades(&self) -> usize {
        self.holes_and_blockades().1
    }

    fn holes_and_blockades(&self) -> (usize, usize) {
        *self.holes_and_blockades.get_or_init(|| {
            let field = self.field;
            let width = field.width();
            let occ = |x, y| field.is_occupied(x, y);

            let mut holes = 0;
            let mut blockades = 0;
            let mut record_hole = |y: usize| {
                holes += 1;
                blockades += self.column_zero_run_from(y + 1);
            };

            let scan_rows = 0..field.total_rows().saturating_sub(1);
            for y in scan_rows.clone() {
                if occ(1, y) && occ(0, y + 1) && !occ(0, y) {
                    record_hole(y);
                }
            }
            for x in 1..width - 1 {
                for y in scan_rows.clone() {
                    if occ(x - 1, y) && occ(x, y + 1) && occ(x + 1, y) && !occ(x, y) {
                        record_hole(y);
                    }
                }
            }
            for y in scan_rows {
                if occ(width - 2, y) && occ(width - 1, y + 1) && occ(width - 1, y) {
                    record_hole(y);
                }
            }
            (holes, blockades)
        })
    }

    /// Length of the run of occupied cells in column `0` starting at row `y`.
    fn column_zero_run_from(&self, y: usize) -> usize {
        (y..self.field.total_rows())
            .take_while(|&y| self.field.is_occupied(0, y))
            .count()
    }
}
