//! Shuffle order and the draw cursor.
//!
//! The universe itself is never reordered. Shuffling permutes an array of
//! universe indices: every index gets an independent random key and the
//! indices are stable-sorted by key, so equal keys keep universe order.

use crate::cards::{CardIndex, UNIVERSE_SIZE};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;

/// A permutation of the 81 universe indices, fixed for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShuffleOrder {
    order: Vec<CardIndex>,
}

impl ShuffleOrder {
    /// Shuffle by sorting universe indices on random keys.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let keys: Vec<u32> = (0..UNIVERSE_SIZE).map(|_| rng.next_key()).collect();
        Self::from_keys(&keys)
    }

    /// Argument sort of `keys`: position `i` of the result is the universe
    /// index with the `i`-th smallest key.
    fn from_keys(keys: &[u32]) -> Self {
        let mut order: Vec<CardIndex> = CardIndex::all().collect();
        // `sort_by_key` is stable: ties stay in universe order.
        order.sort_by_key(|index| keys[index.raw() as usize]);
        Self { order }
    }

    /// Universe order, unshuffled.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            order: CardIndex::all().collect(),
        }
    }

    /// Build an order from raw universe indices.
    ///
    /// Fails unless `indices` is a permutation of `0..81`.
    pub fn from_indices(indices: &[u8]) -> Result<Self, EngineError> {
        if indices.len() != UNIVERSE_SIZE {
            return Err(EngineError::InvalidShuffleOrder(format!(
                "expected {} indices, got {}",
                UNIVERSE_SIZE,
                indices.len()
            )));
        }

        let mut seen = [false; UNIVERSE_SIZE];
        let mut order = Vec::with_capacity(UNIVERSE_SIZE);
        for &raw in indices {
            let index = CardIndex::new(raw).ok_or_else(|| {
                EngineError::InvalidShuffleOrder(format!("index {raw} is outside the universe"))
            })?;
            if std::mem::replace(&mut seen[raw as usize], true) {
                return Err(EngineError::InvalidShuffleOrder(format!(
                    "index {raw} appears twice"
                )));
            }
            order.push(index);
        }

        Ok(Self { order })
    }

    /// Universe index at shuffle position `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<CardIndex> {
        self.order.get(position).copied()
    }

    /// The full order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardIndex] {
        &self.order
    }
}

/// The undealt part of the shuffle order.
///
/// `cursor` points at the next shuffle position to deal. Once it reaches 81
/// the pile is exhausted and `draw` keeps returning `None`.
#[derive(Clone, Debug)]
pub struct DrawPile {
    order: ShuffleOrder,
    cursor: usize,
}

impl DrawPile {
    /// Create a pile that deals from shuffle position `cursor`.
    #[must_use]
    pub fn new(order: ShuffleOrder, cursor: usize) -> Self {
        Self {
            order,
            cursor: cursor.min(UNIVERSE_SIZE),
        }
    }

    /// Deal the next card, advancing the cursor.
    pub fn draw(&mut self) -> Option<CardIndex> {
        let card = self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(card)
    }

    /// Next shuffle position to deal.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        UNIVERSE_SIZE - self.cursor
    }

    /// True once every shuffle position has been passed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= UNIVERSE_SIZE
    }

    /// The shuffle order behind this pile.
    #[must_use]
    pub fn order(&self) -> &ShuffleOrder {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &ShuffleOrder) -> bool {
        let mut raw: Vec<u8> = order.as_slice().iter().map(|i| i.raw()).collect();
        raw.sort_unstable();
        raw == (0..UNIVERSE_SIZE as u8).collect::<Vec<_>>()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let order = ShuffleOrder::new(&mut rng);
        assert!(is_permutation(&order));
        assert_ne!(order, ShuffleOrder::identity());
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let a = ShuffleOrder::new(&mut GameRng::new(7));
        let b = ShuffleOrder::new(&mut GameRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_sort_orders_by_key() {
        let mut keys = vec![100u32; UNIVERSE_SIZE];
        keys[5] = 1;
        keys[3] = 2;
        let order = ShuffleOrder::from_keys(&keys);
        assert_eq!(order.get(0).map(CardIndex::raw), Some(5));
        assert_eq!(order.get(1).map(CardIndex::raw), Some(3));
    }

    #[test]
    fn test_key_sort_ties_keep_universe_order() {
        let keys = vec![9u32; UNIVERSE_SIZE];
        assert_eq!(ShuffleOrder::from_keys(&keys), ShuffleOrder::identity());
    }

    #[test]
    fn test_from_indices_rejects_bad_input() {
        assert!(ShuffleOrder::from_indices(&[0, 1, 2]).is_err());

        let mut duplicated: Vec<u8> = (0..81).collect();
        duplicated[80] = 0;
        assert!(matches!(
            ShuffleOrder::from_indices(&duplicated),
            Err(EngineError::InvalidShuffleOrder(_))
        ));

        let mut out_of_range: Vec<u8> = (0..81).collect();
        out_of_range[0] = 81;
        assert!(ShuffleOrder::from_indices(&out_of_range).is_err());
    }

    #[test]
    fn test_from_indices_accepts_reversed() {
        let reversed: Vec<u8> = (0..81).rev().collect();
        let order = ShuffleOrder::from_indices(&reversed).unwrap();
        assert_eq!(order.get(0).map(CardIndex::raw), Some(80));
        assert!(is_permutation(&order));
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut pile = DrawPile::new(ShuffleOrder::identity(), 78);
        assert_eq!(pile.remaining(), 3);

        assert_eq!(pile.draw().map(CardIndex::raw), Some(78));
        assert_eq!(pile.draw().map(CardIndex::raw), Some(79));
        assert_eq!(pile.draw().map(CardIndex::raw), Some(80));
        assert!(pile.is_exhausted());

        assert_eq!(pile.draw(), None);
        assert_eq!(pile.cursor(), UNIVERSE_SIZE);
        assert_eq!(pile.remaining(), 0);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let pile = DrawPile::new(ShuffleOrder::identity(), 500);
        assert!(pile.is_exhausted());
        assert_eq!(pile.remaining(), 0);
    }
}
