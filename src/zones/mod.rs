//! Card locations: the visible window and the draw pile.
//!
//! ## Key Types
//!
//! - `Window`: the 12 visible slots
//! - `ShuffleOrder`: fixed random permutation of universe indices
//! - `DrawPile`: shuffle order plus the draw cursor

pub mod draw_pile;
pub mod window;

pub use draw_pile::{DrawPile, ShuffleOrder};
pub use window::{Window, WINDOW_SIZE};
