//! Core engine types: RNG, configuration, errors.
//!
//! These are the building blocks shared by the card, zone and engine modules.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DrawStart, EngineConfig};
pub use error::EngineError;
pub use rng::GameRng;
