//! The visible window: 12 fixed slots.
//!
//! Slot identity is stable; only the card occupying a slot changes. A slot
//! becomes empty once a set is cleared after the draw pile ran out.

use crate::cards::CardIndex;

/// Number of visible slots.
pub const WINDOW_SIZE: usize = 12;

/// Contents of the 12 visible slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    slots: [Option<CardIndex>; WINDOW_SIZE],
}

impl Window {
    /// Fill the window from the first 12 entries of `cards`.
    ///
    /// Missing entries leave their slot empty.
    #[must_use]
    pub fn deal<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = CardIndex>,
    {
        let mut slots = [None; WINDOW_SIZE];
        for (slot, card) in slots.iter_mut().zip(cards) {
            *slot = Some(card);
        }
        Self { slots }
    }

    /// Card in `slot`. `None` for an empty slot or a slot out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<CardIndex> {
        self.slots.get(slot).copied().flatten()
    }

    /// Replace the occupant of `slot`.
    ///
    /// Panics if `slot` is out of range.
    pub fn set(&mut self, slot: usize, card: Option<CardIndex>) {
        self.slots[slot] = card;
    }

    /// Iterate over slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<CardIndex>> + '_ {
        self.slots.iter().copied()
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Is `card` currently visible?
    #[must_use]
    pub fn contains(&self, card: CardIndex) -> bool {
        self.slots.contains(&Some(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(raw: u8) -> CardIndex {
        CardIndex::new(raw).unwrap()
    }

    #[test]
    fn test_deal_fills_in_order() {
        let window = Window::deal(CardIndex::all().skip(10));
        assert_eq!(window.occupied(), WINDOW_SIZE);
        assert_eq!(window.get(0), Some(idx(10)));
        assert_eq!(window.get(11), Some(idx(21)));
        assert_eq!(window.get(12), None);
    }

    #[test]
    fn test_short_deal_leaves_empty_slots() {
        let window = Window::deal(CardIndex::all().take(4));
        assert_eq!(window.occupied(), 4);
        assert_eq!(window.get(4), None);
    }

    #[test]
    fn test_set_and_contains() {
        let mut window = Window::deal(CardIndex::all());
        assert!(window.contains(idx(3)));

        window.set(3, Some(idx(40)));
        assert!(!window.contains(idx(3)));
        assert!(window.contains(idx(40)));

        window.set(3, None);
        assert_eq!(window.get(3), None);
        assert_eq!(window.occupied(), WINDOW_SIZE - 1);
    }
}
