use std::fmt;

use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::InvalidPieceKindError;

/// Enum representing the type of piece.
///
/// Discriminants are the identifiers used by piece sequence files and move
/// logs (`1..=7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 1,
    /// O-piece.
    O = 2,
    /// T-piece.
    T = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// S-piece.
    S = 6,
    /// Z-piece.
    Z = 7,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = InvalidPieceKindError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PieceKind::I),
            2 => Ok(PieceKind::O),
            3 => Ok(PieceKind::T),
            4 => Ok(PieceKind::J),
            5 => Ok(PieceKind::L),
            6 => Ok(PieceKind::S),
            7 => Ok(PieceKind::Z),
            _ => Err(InvalidPieceKindError { value }),
        }
    }
}

impl From<PieceKind> for u8 {
    fn from(kind: PieceKind) -> Self {
        kind.id()
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in identifier order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Returns the numeric identifier of this kind (`1..=7`).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Parses a piece kind from its identifier digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetsolve_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_digit('1'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_digit('7'), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_digit('8'), None);
    /// ```
    #[must_use]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(PieceKind::I),
            '2' => Some(PieceKind::O),
            '3' => Some(PieceKind::T),
            '4' => Some(PieceKind::J),
            '5' => Some(PieceKind::L),
            '6' => Some(PieceKind::S),
            '7' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Returns the single character name of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the number of distinct rotation states.
    ///
    /// 180° symmetric shapes (I, S, Z) have two states and O has one.
    #[must_use]
    pub const fn rotation_count(self) -> usize {
        SHAPES[self.index()].len()
    }

    /// Normalizes an arbitrary rotation index, wrapping at [`Self::rotation_count`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn rotation(self, index: usize) -> PieceRotation {
        PieceRotation((index % self.rotation_count()) as u8)
    }

    /// Returns every distinct rotation state in ascending order.
    #[must_use]
    pub fn rotations(self) -> ArrayVec<PieceRotation, 4> {
        (0..self.rotation_count()).map(|i| self.rotation(i)).collect()
    }

    /// Returns the footprint of this kind in the given rotation.
    #[must_use]
    pub const fn geometry(self, rotation: PieceRotation) -> &'static ShapeGeometry {
        let shapes = SHAPES[self.index()];
        &shapes[rotation.index() % shapes.len()]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rotation state of a piece.
///
/// Index `n` is an anticlockwise rotation by `n * 90°` from the spawn
/// orientation. Only indices below [`PieceKind::rotation_count`] are
/// distinct; use [`PieceKind::rotation`] to build a normalized value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceRotation(u8);

impl PieceRotation {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell offset `(dx, dy)` relative to the footprint anchor.
///
/// `dx` grows to the right and `dy` grows upward, so `(0, 0)` is the
/// bottom-left corner of the footprint's bounding box.
pub type CellOffset = (usize, usize);

/// Footprint of one (kind, rotation) pair.
///
/// `probes` are the cells that rest on the stack when the piece lands: the
/// lowest cell of every footprint column. A drop stops as soon as the cell
/// below any probe is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGeometry {
    cells: [CellOffset; 4],
    probes: &'static [CellOffset],
    width: usize,
    height: usize,
}

impl ShapeGeometry {
    const fn new(cells: [CellOffset; 4], probes: &'static [CellOffset]) -> Self {
        let mut width = 0;
        let mut height = 0;
        let mut i = 0;
        while i < cells.len() {
            let (dx, dy) = cells[i];
            if dx + 1 > width {
                width = dx + 1;
            }
            if dy + 1 > height {
                height = dy + 1;
            }
            i += 1;
        }
        assert!(probes.len() == width, "one probe per footprint column");
        Self {
            cells,
            probes,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &[CellOffset; 4] {
        &self.cells
    }

    #[must_use]
    pub const fn probes(&self) -> &'static [CellOffset] {
        self.probes
    }

    /// Number of columns covered by the footprint.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows covered by the footprint.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }
}

const SHAPES: [&[ShapeGeometry]; PieceKind::LEN] = {
    const fn s(cells: [CellOffset; 4], probes: &'static [CellOffset]) -> ShapeGeometry {
        ShapeGeometry::new(cells, probes)
    }

    [
        // I-piece: vertical, horizontal
        &[
            s([(0, 0), (0, 1), (0, 2), (0, 3)], &[(0, 0)]),
            s(
                [(0, 0), (1, 0), (2, 0), (3, 0)],
                &[(0, 0), (1, 0), (2, 0), (3, 0)],
            ),
        ],
        // O-piece
        &[s([(0, 0), (1, 0), (0, 1), (1, 1)], &[(0, 0), (1, 0)])],
        // T-piece: nose right, up, left, down
        &[
            s([(0, 0), (0, 1), (1, 1), (0, 2)], &[(0, 0), (1, 1)]),
            s([(0, 0), (1, 0), (2, 0), (1, 1)], &[(0, 0), (1, 0), (2, 0)]),
            s([(1, 0), (0, 1), (1, 1), (1, 2)], &[(0, 1), (1, 0)]),
            s([(1, 0), (0, 1), (1, 1), (2, 1)], &[(0, 1), (1, 0), (2, 1)]),
        ],
        // J-piece
        &[
            s([(0, 0), (0, 1), (0, 2), (1, 2)], &[(0, 0), (1, 2)]),
            s([(0, 0), (1, 0), (2, 0), (0, 1)], &[(0, 0), (1, 0), (2, 0)]),
            s([(0, 0), (1, 0), (1, 1), (1, 2)], &[(0, 0), (1, 0)]),
            s([(2, 0), (0, 1), (1, 1), (2, 1)], &[(0, 1), (1, 1), (2, 0)]),
        ],
        // L-piece
        &[
            s([(1, 0), (1, 1), (0, 2), (1, 2)], &[(0, 2), (1, 0)]),
            s([(0, 0), (0, 1), (1, 1), (2, 1)], &[(0, 0), (1, 1), (2, 1)]),
            s([(0, 0), (1, 0), (0, 1), (0, 2)], &[(0, 0), (1, 0)]),
            s([(0, 0), (1, 0), (2, 0), (2, 1)], &[(0, 0), (1, 0), (2, 0)]),
        ],
        // S-piece
        &[
            s([(1, 0), (0, 1), (1, 1), (0, 2)], &[(0, 1), (1, 0)]),
            s([(0, 0), (1, 0), (1, 1), (2, 1)], &[(0, 0), (1, 0), (2, 1)]),
        ],
        // Z-piece
        &[
            s([(0, 0), (0, 1), (1, 1), (1, 2)], &[(0, 0), (1, 1)]),
            s([(1, 0), (2, 0), (0, 1), (1, 1)], &[(0, 1), (1, 0), (2, 0)]),
        ],
    ]
};
