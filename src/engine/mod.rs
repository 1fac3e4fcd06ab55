//! The deck engine and its selection state.
//!
//! ## Key Types
//!
//! - `DeckEngine`: owns every piece of game state; driven by `click`
//! - `Selection`: ordered 0-3 selected slots
//! - `ClickOutcome`: what a click did
//! - `EngineSnapshot`: serializable view for renderers

pub mod deck;
pub mod selection;

pub use deck::{ClickOutcome, DeckEngine, EngineSnapshot};
pub use selection::{Selection, Toggle, SET_SIZE};
