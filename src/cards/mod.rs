//! Card system: attributes, card values and the universe.
//!
//! ## Key Types
//!
//! - `Count`, `Color`, `Symbol`, `Fill`: the four attributes
//! - `Card`: immutable attribute combination
//! - `CardIndex`: position of a card in the universe
//! - `Universe`: all 81 cards in construction order

pub mod attributes;
pub mod card;
pub mod universe;

pub use attributes::{Attribute, Color, Count, Fill, Symbol, VALUES_PER_ATTRIBUTE};
pub use card::{Card, CardIndex, UNIVERSE_SIZE};
pub use universe::Universe;
