use std::{
    collections::VecDeque,
    fmt::Write as _,
    io::{self, BufRead},
    str::FromStr,
};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{InvalidSeedError, PieceKind};

/// Ordered piece identities to be placed.
///
/// Parsing is permissive: every character in `'1'..='7'` is one piece and
/// everything else is ignored.
///
/// # Example
///
/// ```
/// use tetsolve_engine::{PieceKind, PieceSequence};
///
/// let sequence = PieceSequence::parse("1 2\n9 x7");
/// assert_eq!(sequence.as_slice(), [PieceKind::I, PieceKind::O, PieceKind::Z]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSequence {
    pieces: Vec<PieceKind>,
}

impl PieceSequence {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            pieces: text.chars().filter_map(PieceKind::from_digit).collect(),
        }
    }

    /// Reads and parses a whole text source.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut pieces = Vec::new();
        for line in reader.lines() {
            pieces.extend(line?.chars().filter_map(PieceKind::from_digit));
        }
        Ok(Self { pieces })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PieceKind] {
        &self.pieces
    }

    /// Writes one piece identifier per line, readable by [`Self::from_reader`].
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        for kind in &self.pieces {
            writeln!(writer, "{}", kind.id())?;
        }
        writer.flush()
    }
}

impl FromIterator<PieceKind> for PieceSequence {
    fn from_iter<T: IntoIterator<Item = PieceKind>>(iter: T) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hex digits. Using the same seed produces the
/// same sequence, so generated inputs can be reproduced exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl FromStr for PieceSeed {
    type Err = InvalidSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(InvalidSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(InvalidSeedError::Hex)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl std::fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// How generated pieces are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawMode {
    /// Every piece is drawn independently and uniformly.
    #[default]
    Uniform,
    /// Pieces are dealt from shuffled bags holding one of each kind.
    Bag,
}

/// Deterministic source of random piece sequences.
///
/// # Example
///
/// ```
/// use tetsolve_engine::{DrawMode, PieceGenerator, PieceSeed};
///
/// let seed = PieceSeed::from_bytes([7; 16]);
/// let a = PieceGenerator::new(seed, DrawMode::Bag).take_sequence(14);
/// let b = PieceGenerator::new(seed, DrawMode::Bag).take_sequence(14);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    mode: DrawMode,
    bag: VecDeque<PieceKind>,
}

impl PieceGenerator {
    #[must_use]
    pub fn new(seed: PieceSeed, mode: DrawMode) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            mode,
            bag: VecDeque::with_capacity(PieceKind::LEN),
        }
    }

    /// Draws the next piece.
    ///
    /// # Panics
    ///
    /// Panics if the bag is empty after refilling (should never happen).
    pub fn pop_next(&mut self) -> PieceKind {
        match self.mode {
            DrawMode::Uniform => self.rng.random(),
            DrawMode::Bag => {
                if self.bag.is_empty() {
                    let mut new_bag = PieceKind::ALL;
                    new_bag.shuffle(&mut self.rng);
                    self.bag.extend(new_bag);
                }
                self.bag
                    .pop_front()
                    .expect("Piece bag should never be empty")
            }
        }
    }

    /// Draws `len` pieces into a new sequence.
    pub fn take_sequence(&mut self, len: usize) -> PieceSequence {
        (0..len).map(|_| self.pop_next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_other_characters() {
        let sequence = PieceSequence::parse("a1b2 3\t4-5,6.7 0 8 9 12");
        let ids: Vec<_> = sequence.as_slice().iter().map(|k| k.id()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 1, 2]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(PieceSequence::parse("").is_empty());
        assert!(PieceSequence::parse("no pieces here, 089").is_empty());
    }

    #[test]
    fn test_from_reader_spans_lines() {
        let text = "12\n\n34\r\n567\n";
        let sequence = PieceSequence::from_reader(text.as_bytes()).unwrap();
        assert_eq!(sequence, PieceSequence::parse("1234567"));
        assert_eq!(sequence.len(), 7);
    }

    #[test]
    fn test_write_to_is_readable() {
        let sequence = PieceSequence::parse("7315");
        let mut out = Vec::new();
        sequence.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "7\n3\n1\n5\n");
        assert_eq!(PieceSequence::from_reader(&out[..]).unwrap(), sequence);
    }

    #[test]
    fn test_seed_text_format() {
        let seed = PieceSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!("0123456789ABCDEFFEDCBA9876543210".parse::<PieceSeed>().unwrap(), seed);

        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");
        assert_eq!(serde_json::from_str::<PieceSeed>(&serialized).unwrap(), seed);
    }

    #[test]
    fn test_seed_errors() {
        assert!(matches!(
            "0123".parse::<PieceSeed>(),
            Err(InvalidSeedError::Length { len: 4 })
        ));
        assert!(matches!(
            "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<PieceSeed>(),
            Err(InvalidSeedError::Hex(_))
        ));
        let err = serde_json::from_str::<PieceSeed>("\"\"").unwrap_err();
        assert!(err.to_string().contains("invalid seed"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let seed = PieceSeed::from_bytes([0x42; 16]);
        for mode in [DrawMode::Uniform, DrawMode::Bag] {
            let a = PieceGenerator::new(seed, mode).take_sequence(50);
            let b = PieceGenerator::new(seed, mode).take_sequence(50);
            assert_eq!(a, b);
            assert_eq!(a.len(), 50);
        }
    }

    #[test]
    fn test_bag_deals_each_kind_once_per_bag() {
        let seed: PieceSeed = rand::rng().random();
        let sequence = PieceGenerator::new(seed, DrawMode::Bag).take_sequence(PieceKind::LEN * 3);
        for bag in sequence.as_slice().chunks(PieceKind::LEN) {
            let mut ids: Vec<_> = bag.iter().map(|k| k.id()).collect();
            ids.sort_unstable();
            assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7]);
        }
    }
}
