use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::core::piece::{PieceKind, PieceRotation};

/// A committed placement: piece kind, rotation and requested column.
///
/// Rendered as three whitespace-separated integers, e.g. `"3 1 4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    kind: PieceKind,
    rotation: PieceRotation,
    column: usize,
}

impl Move {
    #[must_use]
    pub const fn new(kind: PieceKind, rotation: PieceRotation, column: usize) -> Self {
        Self {
            kind,
            rotation,
            column,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind.id(), self.rotation, self.column)
    }
}

/// Append-only record of committed moves, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.moves.iter()
    }

    /// Writes one `"id rotation column"` line per move.
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        for mv in &self.moves {
            writeln!(writer, "{mv}")?;
        }
        writer.flush()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(PieceKind::J, PieceKind::J.rotation(3), 8);
        assert_eq!(mv.to_string(), "4 3 8");
    }

    #[test]
    fn test_write_to_emits_one_line_per_move() {
        let mut log = MoveLog::default();
        log.push(Move::new(PieceKind::I, PieceKind::I.rotation(1), 0));
        log.push(Move::new(PieceKind::O, PieceKind::O.rotation(0), 9));
        log.push(Move::new(PieceKind::Z, PieceKind::Z.rotation(0), 3));

        let mut out = Vec::new();
        log.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 1 0\n2 0 9\n7 0 3\n");
    }

    #[test]
    fn test_empty_log_writes_nothing() {
        let mut out = Vec::new();
        MoveLog::default().write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_move_log_serialization() {
        let mut log = MoveLog::with_capacity(1);
        log.push(Move::new(PieceKind::T, PieceKind::T.rotation(2), 5));
        let serialized = serde_json::to_string(&log).unwrap();
        assert_eq!(serialized, r#"[{"kind":3,"rotation":2,"column":5}]"#);
        let deserialized: MoveLog = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, log);
    }
}
