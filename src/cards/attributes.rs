//! The four card attributes.
//!
//! Every attribute has exactly three values. The `Attribute` trait gives
//! them a shared shape so the set rule and the universe builder can treat
//! them uniformly:
//!
//! - `Count`: One, Two, Three symbols
//! - `Color`: Red, Blue, Green
//! - `Symbol`: Oval, Rhombus, Wiggle
//! - `Fill`: Empty, Striped, Full

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of values each attribute takes.
pub const VALUES_PER_ATTRIBUTE: usize = 3;

/// Shared behaviour of the four attribute enums.
pub trait Attribute: Copy + Eq + fmt::Debug + 'static {
    /// All values in declaration order.
    const ALL: [Self; VALUES_PER_ATTRIBUTE];

    /// Position of this value in `ALL` (0, 1 or 2).
    fn ordinal(self) -> u8;

    /// Human-readable name, for debugging and logging.
    fn name(self) -> &'static str;

    /// Value at `ordinal`, or `None` if out of range.
    #[must_use]
    fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl Attribute for $name {
            const ALL: [Self; VALUES_PER_ATTRIBUTE] = [$($name::$variant),+];

            fn ordinal(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

attribute_enum! {
    /// Number of symbols printed on a card.
    Count { One => "1", Two => "2", Three => "3" }
}

attribute_enum! {
    /// Card colour.
    Color { Red => "red", Blue => "blue", Green => "green" }
}

attribute_enum! {
    /// Symbol shape.
    Symbol { Oval => "oval", Rhombus => "rhombus", Wiggle => "wiggle" }
}

attribute_enum! {
    /// Symbol fill.
    Fill { Empty => "empty", Striped => "stripes", Full => "full" }
}

impl Count {
    /// Number of symbols as an integer (1-3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Count for 1, 2 or 3 symbols.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        value.checked_sub(1).and_then(Self::from_ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.ordinal() as usize, i);
            assert_eq!(Color::from_ordinal(i as u8), Some(*color));
        }
        assert_eq!(Fill::from_ordinal(3), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Color::Green.name(), "green");
        assert_eq!(Symbol::Rhombus.name(), "rhombus");
        assert_eq!(Fill::Striped.name(), "stripes");
        assert_eq!(Count::Three.to_string(), "3");
    }

    #[test]
    fn test_count_values() {
        assert_eq!(Count::One.value(), 1);
        assert_eq!(Count::Three.value(), 3);
        assert_eq!(Count::from_value(2), Some(Count::Two));
        assert_eq!(Count::from_value(0), None);
        assert_eq!(Count::from_value(4), None);
    }
}
