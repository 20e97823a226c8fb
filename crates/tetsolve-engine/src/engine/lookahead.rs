use crate::PieceKind;

/// Pieces held back for a possible swap against the newly revealed piece.
///
/// # Lifecycle
///
/// 1. **Prime**: [`Self::prime`] fills the slots from the head of the sequence.
/// 2. **Steady state**: every revealed piece competes with the held pieces
///    (see [`Self::candidates_with`]). If a held piece wins, the revealed piece
///    takes its slot via [`Self::absorb`].
/// 3. **Drain**: once the sequence is exhausted the slots are played left to
///    right; [`Self::swap`] moves an unplayed piece forward when a later slot
///    wins a drain step.
///
/// # Example
///
/// ```
/// use tetsolve_engine::{LookaheadBuffer, PieceKind};
///
/// let mut buffer = LookaheadBuffer::new(1);
/// let consumed = buffer.prime(&[PieceKind::T, PieceKind::S, PieceKind::I]);
/// assert_eq!(consumed, 1);
///
/// let candidates: Vec<_> = buffer.candidates_with(PieceKind::S).collect();
/// assert_eq!(candidates, [PieceKind::S, PieceKind::T]);
///
/// // the held T was played, so S is held back instead
/// assert_eq!(buffer.absorb(0, PieceKind::S), PieceKind::T);
/// assert_eq!(buffer.slots(), [PieceKind::S]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookaheadBuffer {
    capacity: usize,
    slots: Vec<PieceKind>,
}

impl LookaheadBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn slots(&self) -> &[PieceKind] {
        &self.slots
    }

    /// Fills the empty slots from the head of `pieces`.
    ///
    /// Returns how many pieces were taken. Fewer than the capacity are taken
    /// when `pieces` is shorter.
    pub fn prime(&mut self, pieces: &[PieceKind]) -> usize {
        let take = usize::min(self.capacity - self.slots.len(), pieces.len());
        self.slots.extend_from_slice(&pieces[..take]);
        take
    }

    /// Lists the candidates for one decision: `revealed` first, then every
    /// held piece in slot order.
    ///
    /// Candidate index `i > 0` refers to slot `i - 1`.
    pub fn candidates_with(&self, revealed: PieceKind) -> impl Iterator<Item = PieceKind> + '_ {
        std::iter::once(revealed).chain(self.slots.iter().copied())
    }

    /// Replaces the piece in `slot` with `revealed`, returning the piece that
    /// was held there.
    pub fn absorb(&mut self, slot: usize, revealed: PieceKind) -> PieceKind {
        std::mem::replace(&mut self.slots[slot], revealed)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
