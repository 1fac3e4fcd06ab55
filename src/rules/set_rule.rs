//! The set rule.
//!
//! Three cards form a set when, for each of the four attributes, the three
//! values are either all equal or all pairwise distinct. "Two the same, one
//! different" on any attribute breaks the set.

use crate::cards::{Attribute, Card, VALUES_PER_ATTRIBUTE};

fn all_same_or_all_different<A: Attribute>(a: A, b: A, c: A) -> bool {
    (a == b && b == c) || (a != b && a != c && b != c)
}

/// Do the three cards form a set?
///
/// The result does not depend on argument order.
///
/// ```
/// use open_set::cards::{Card, Color, Count, Fill, Symbol};
/// use open_set::rules::is_set;
///
/// let one = Card::new(Count::One, Color::Red, Symbol::Oval, Fill::Empty);
/// let two = Card::new(Count::Two, Color::Red, Symbol::Oval, Fill::Empty);
/// let three = Card::new(Count::Three, Color::Red, Symbol::Oval, Fill::Empty);
/// assert!(is_set(&one, &two, &three));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    all_same_or_all_different(a.count(), b.count(), c.count())
        && all_same_or_all_different(a.color(), b.color(), c.color())
        && all_same_or_all_different(a.symbol(), b.symbol(), c.symbol())
        && all_same_or_all_different(a.fill(), b.fill(), c.fill())
}

fn complete<A: Attribute>(a: A, b: A) -> A {
    // Ordinals of a set sum to 0 mod 3 on every attribute.
    let n = VALUES_PER_ATTRIBUTE as u8;
    let ordinal = (2 * n - a.ordinal() - b.ordinal()) % n;
    A::ALL[ordinal as usize]
}

/// The one card that completes a set with `a` and `b`.
///
/// If `a == b` the result is that same card.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    Card::new(
        complete(a.count(), b.count()),
        complete(a.color(), b.color()),
        complete(a.symbol(), b.symbol()),
        complete(a.fill(), b.fill()),
    )
}

/// First set among `cards`, as ascending positions.
///
/// Empty positions are skipped. Triples are searched in lexicographic
/// order of positions.
#[must_use]
pub fn find_set(cards: &[Option<Card>]) -> Option<[usize; 3]> {
    for (i, a) in cards.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in cards.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            let wanted = third_card(a, b);
            if let Some(k) = cards
                .iter()
                .enumerate()
                .skip(j + 1)
                .find_map(|(k, c)| (*c == Some(wanted)).then_some(k))
            {
                return Some([i, j, k]);
            }
        }
    }
    None
}
