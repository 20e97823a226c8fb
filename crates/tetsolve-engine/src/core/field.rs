use std::{fmt, ops::RangeInclusive};

use super::piece::{PieceKind, PieceRotation, ShapeGeometry};

/// Single row of the field.
///
/// Stores one row as a 64-bit bitmask where bit `x` is column `x`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitRow {
    bits: u64,
}

impl BitRow {
    pub const EMPTY: Self = Self { bits: 0 };

    /// Checks if a cell at the given column is occupied.
    #[inline]
    #[must_use]
    pub fn is_cell_occupied(self, x: usize) -> bool {
        (self.bits & (1 << x)) != 0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of occupied cells in the row.
    #[inline]
    #[must_use]
    pub fn occupied_cells(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    fn occupy_cell(&mut self, x: usize) {
        self.bits |= 1 << x;
    }

    #[inline]
    fn is_filled(self, full_mask: u64) -> bool {
        (self.bits & full_mask) == full_mask
    }
}

/// Occupancy grid that pieces are dropped into.
///
/// Row `0` is the floor and row indices grow upward. The grid is sized from a
/// height bound supplied by the caller plus [`Field::HEADROOM`] rows, and grows
/// whenever a placement reaches into the headroom, so the top
/// [`Field::HEADROOM`] rows are always empty. A drop therefore always starts
/// above the stack.
///
/// # Example
///
/// ```
/// use tetsolve_engine::{Field, PieceKind};
///
/// let mut field = Field::new(11, 8);
/// let rotation = PieceKind::O.rotation(0);
/// let cleared = field.place(PieceKind::O, rotation, 0);
///
/// assert_eq!(cleared, 0);
/// assert!(field.is_occupied(0, 0) && field.is_occupied(1, 1));
/// assert_eq!(field.occupied_cells(), 4);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Field {
    width: usize,
    full_mask: u64,
    rows: Vec<BitRow>,
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            full_mask: self.full_mask,
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.full_mask = source.full_mask;
        self.rows.clone_from(&source.rows);
    }
}

impl Field {
    /// Supported field widths. Four columns fit the widest footprint.
    pub const WIDTH_RANGE: RangeInclusive<usize> = 4..=64;
    /// Number of empty rows kept above the stack.
    pub const HEADROOM: usize = 4;

    /// Creates an empty field with room for `height_bound` rows of stack.
    ///
    /// # Panics
    ///
    /// Panics if `width` is outside [`Self::WIDTH_RANGE`].
    #[must_use]
    pub fn new(width: usize, height_bound: usize) -> Self {
        assert!(
            Self::WIDTH_RANGE.contains(&width),
            "field width must be within {:?}, got {width}",
            Self::WIDTH_RANGE
        );
        Self {
            width,
            full_mask: u64::MAX >> (u64::BITS as usize - width),
            rows: vec![BitRow::EMPTY; height_bound + Self::HEADROOM],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of allocated rows, headroom included.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at the given index (`0` is the floor).
    #[must_use]
    pub fn row(&self, y: usize) -> BitRow {
        self.rows[y]
    }

    pub fn rows(&self) -> impl Iterator<Item = BitRow> + '_ {
        self.rows.iter().copied()
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows[y].is_cell_occupied(x)
    }

    #[must_use]
    pub fn row_is_empty(&self, y: usize) -> bool {
        self.rows[y].is_empty()
    }

    #[must_use]
    pub fn row_is_full(&self, y: usize) -> bool {
        self.rows[y].is_filled(self.full_mask)
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.rows().map(BitRow::occupied_cells).sum()
    }

    /// One past the highest occupied row, or `0` for an empty field.
    #[must_use]
    pub fn stack_height(&self) -> usize {
        self.rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map_or(0, |y| y + 1)
    }

    /// Clamps a requested column so the footprint stays inside the right wall.
    ///
    /// Requests past the wall are corrected rather than rejected.
    #[must_use]
    pub fn clamp_column(&self, kind: PieceKind, rotation: PieceRotation, column: usize) -> usize {
        column.min(self.width - kind.geometry(rotation).width())
    }

    /// Computes the row the footprint's bottom edge lands on.
    ///
    /// Scans down from the top of the grid and stops at the first row where
    /// moving one more row down would push a probe cell into an occupied cell.
    /// Row `0` is always a valid stop. The column is clamped first.
    #[must_use]
    pub fn drop_height(&self, kind: PieceKind, rotation: PieceRotation, column: usize) -> usize {
        let column = self.clamp_column(kind, rotation, column);
        let geometry = kind.geometry(rotation);
        let mut row = self.rows.len() - geometry.height();
        while row > 0 && !self.is_resting(geometry, column, row) {
            row -= 1;
        }
        row
    }

    fn is_resting(&self, geometry: &ShapeGeometry, column: usize, row: usize) -> bool {
        geometry
            .probes()
            .iter()
            .any(|&(dx, dy)| self.is_occupied(column + dx, row + dy - 1))
    }

    /// Drops a piece, locks its cells and clears completed lines.
    ///
    /// Returns the number of lines cleared.
    pub fn place(&mut self, kind: PieceKind, rotation: PieceRotation, column: usize) -> usize {
        let column = self.clamp_column(kind, rotation, column);
        let row = self.drop_height(kind, rotation, column);
        for &(dx, dy) in kind.geometry(rotation).cells() {
            self.rows[row + dy].occupy_cell(column + dx);
        }
        let cleared = self.clear_full_lines();
        self.ensure_headroom();
        cleared
    }

    /// Removes every full row, shifting the rows above down by one per removal.
    ///
    /// Rows are scanned from the floor up. After a removal the same index is
    /// examined again because the row above has moved into it.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = 0;
        while y < self.rows.len() {
            if self.rows[y].is_filled(self.full_mask) {
                self.rows.remove(y);
                self.rows.push(BitRow::EMPTY);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Overwrites this field with `snapshot`, reusing the row allocation.
    pub fn restore(&mut self, snapshot: &Field) {
        self.clone_from(snapshot);
    }

    fn ensure_headroom(&mut self) {
        let required = self.stack_height() + Self::HEADROOM;
        if self.rows.len() < required {
            self.rows.resize(required, BitRow::EMPTY);
        }
    }

    /// Creates a field from ASCII art for testing.
    ///
    /// '#' represents an occupied cell, '.' an empty cell. Rows are listed from
    /// top to bottom, so the last line is row `0`. The width is taken from the
    /// first row and the height bound from the number of rows.
    ///
    /// # Panics
    ///
    /// Panics if rows have different widths or the width is unsupported.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<Vec<char>> = art
            .lines()
            .map(|line| line.chars().filter(|c| *c == '#' || *c == '.').collect())
            .filter(|chars: &Vec<char>| !chars.is_empty())
            .collect();
        let width = lines.first().map_or(0, Vec::len);
        let mut field = Self::new(width, lines.len());

        for (y, chars) in lines.iter().rev().enumerate() {
            assert_eq!(
                chars.len(),
                width,
                "Each row must have exactly {width} cells, got {} at row {y}",
                chars.len()
            );
            for (x, &ch) in chars.iter().enumerate() {
                if ch == '#' {
                    field.rows[y].occupy_cell(x);
                }
            }
        }
        field.ensure_headroom();
        field
    }
}

impl fmt::Display for Field {
    /// Renders the stack top-down, one line per row, with `#` for occupied cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.stack_height()).rev() {
            for x in 0..self.width {
                let ch = if self.is_occupied(x, y) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
