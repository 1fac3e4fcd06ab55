//! # open-set
//!
//! Deck engine for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: Universe, shuffle order, visible window,
//!    draw cursor and selection all live in `DeckEngine`. Renderers read,
//!    input layers click.
//!
//! 2. **Cards are plain values**: A `Card` is four attributes and nothing
//!    else. Selection highlighting is a query on the engine.
//!
//! 3. **Replayable shuffles**: One seeded ChaCha8 RNG per game, used once.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Attributes, card values, the 81-card universe
//! - `zones`: Visible window, shuffle order and draw pile
//! - `rules`: The set rule and board search
//! - `engine`: Selection state machine and the deck engine

pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{DrawStart, EngineConfig, EngineError, GameRng};

pub use crate::cards::{
    Attribute, Card, CardIndex, Color, Count, Fill, Symbol, Universe, UNIVERSE_SIZE,
};

pub use crate::zones::{DrawPile, ShuffleOrder, Window, WINDOW_SIZE};

pub use crate::rules::{find_set, is_set, third_card};

pub use crate::engine::{ClickOutcome, DeckEngine, EngineSnapshot, Selection, SET_SIZE};
