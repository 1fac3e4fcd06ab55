//! The fixed universe of all 81 cards.
//!
//! Built once in nested attribute order (count outer, then color, symbol,
//! fill inner), so position `i` always holds `CardIndex(i).card()`.

use super::attributes::{Attribute, Color, Count, Fill, Symbol};
use super::card::{Card, CardIndex, UNIVERSE_SIZE};

/// All 81 cards in construction order.
///
/// ## Usage
///
/// ```
/// use open_set::cards::{CardIndex, Universe};
///
/// let universe = Universe::new();
/// assert_eq!(universe.len(), 81);
///
/// let index = CardIndex::new(27).unwrap();
/// assert_eq!(universe.get(index).count().value(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Universe {
    cards: Vec<Card>,
}

impl Universe {
    /// Generate the universe.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(UNIVERSE_SIZE);
        for count in Count::ALL {
            for color in Color::ALL {
                for symbol in Symbol::ALL {
                    for fill in Fill::ALL {
                        cards.push(Card::new(count, color, symbol, fill));
                    }
                }
            }
        }
        Self { cards }
    }

    /// Card at the given universe index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Card {
        self.cards[index.raw() as usize]
    }

    /// Number of cards (always 81).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the universe holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in universe order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}
