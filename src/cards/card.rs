//! Card values and universe indices.
//!
//! A `Card` is an immutable combination of the four attributes. There is no
//! "blank" card: an empty slot is `Option::<Card>::None`.
//!
//! `CardIndex` is the position of a card in the universe. The mapping is a
//! pure function of the attributes (count-major, then color, symbol, fill):
//!
//! ```text
//! index = count * 27 + color * 9 + symbol * 3 + fill
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Fill, Symbol};

/// Total number of distinct cards.
pub const UNIVERSE_SIZE: usize = 81;

/// Position of a card in the universe (0..81).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(u8);

impl CardIndex {
    /// Create an index, or `None` if it is outside the universe.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < UNIVERSE_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The card stored at this index.
    #[must_use]
    pub fn card(self) -> Card {
        let i = self.0;
        // Every digit is < 3, so the lookups cannot fail.
        Card {
            count: Count::ALL[(i / 27) as usize],
            color: Color::ALL[(i / 9 % 3) as usize],
            symbol: Symbol::ALL[(i / 3 % 3) as usize],
            fill: Fill::ALL[(i % 3) as usize],
        }
    }

    /// Iterate over every index in universe order.
    pub fn all() -> impl Iterator<Item = CardIndex> {
        (0..UNIVERSE_SIZE as u8).map(CardIndex)
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single Set card.
///
/// ## Example
///
/// ```
/// use open_set::cards::{Card, Color, Count, Fill, Symbol};
///
/// let card = Card::new(Count::Two, Color::Red, Symbol::Oval, Fill::Striped);
/// assert_eq!(card.count().value(), 2);
/// assert_eq!(card.to_string(), "2 red oval stripes");
/// assert_eq!(card.index().card(), card);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    count: Count,
    color: Color,
    symbol: Symbol,
    fill: Fill,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(count: Count, color: Color, symbol: Symbol, fill: Fill) -> Self {
        Self {
            count,
            color,
            symbol,
            fill,
        }
    }

    /// Number of symbols.
    #[must_use]
    pub const fn count(&self) -> Count {
        self.count
    }

    /// Colour.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Symbol shape.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Symbol fill.
    #[must_use]
    pub const fn fill(&self) -> Fill {
        self.fill
    }

    /// Universe index of this card.
    #[must_use]
    pub fn index(&self) -> CardIndex {
        CardIndex(
            self.count.ordinal() * 27
                + self.color.ordinal() * 9
                + self.symbol.ordinal() * 3
                + self.fill.ordinal(),
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.symbol, self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_over_universe() {
        for index in CardIndex::all() {
            assert_eq!(index.card().index(), index);
        }
    }

    #[test]
    fn test_index_is_count_major() {
        let first = Card::new(Count::One, Color::Red, Symbol::Oval, Fill::Empty);
        let last = Card::new(Count::Three, Color::Green, Symbol::Wiggle, Fill::Full);
        let second_count = Card::new(Count::Two, Color::Red, Symbol::Oval, Fill::Empty);

        assert_eq!(first.index().raw(), 0);
        assert_eq!(last.index().raw(), 80);
        assert_eq!(second_count.index().raw(), 27);
    }

    #[test]
    fn test_new_index_bounds() {
        assert!(CardIndex::new(80).is_some());
        assert!(CardIndex::new(81).is_none());
    }

    #[test]
    fn test_display() {
        let card = Card::new(Count::Three, Color::Green, Symbol::Wiggle, Fill::Empty);
        assert_eq!(card.to_string(), "3 green wiggle empty");
        assert_eq!(card.index().to_string(), "#78");
    }

    #[test]
    fn test_equality_is_attribute_wise() {
        let a = Card::new(Count::One, Color::Blue, Symbol::Oval, Fill::Full);
        let b = Card::new(Count::One, Color::Blue, Symbol::Oval, Fill::Full);
        let c = Card::new(Count::One, Color::Blue, Symbol::Oval, Fill::Empty);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
