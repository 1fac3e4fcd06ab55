//! Engine configuration.
//!
//! A game is configured at startup by providing an `EngineConfig`:
//! - `seed`: fixed seed for a replayable deal, or `None` for a clock seed
//! - `draw_start`: where the draw cursor starts after the initial deal

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::zones::WINDOW_SIZE;

/// Where the draw cursor starts after the first 12 cards are dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawStart {
    /// Deal from shuffle position 12. Every card of the universe is dealt.
    #[default]
    Next,
    /// Deal from shuffle position 13. Position 12 stays in the pile for the
    /// whole game and is never shown.
    SkipReserved,
}

impl DrawStart {
    /// Initial draw cursor for this policy.
    #[must_use]
    pub const fn cursor(self) -> usize {
        match self {
            DrawStart::Next => WINDOW_SIZE,
            DrawStart::SkipReserved => WINDOW_SIZE + 1,
        }
    }
}

/// Configuration for a single game.
///
/// ## Example
///
/// ```
/// use open_set::core::{DrawStart, EngineConfig};
///
/// let config = EngineConfig::new().with_seed(42).skip_reserved();
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.draw_start, DrawStart::SkipReserved);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shuffle seed. `None` seeds from the system clock.
    pub seed: Option<u64>,

    /// Initial draw cursor policy.
    pub draw_start: DrawStart,
}

impl EngineConfig {
    /// Create a configuration with a clock seed and the default draw start.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the draw start policy.
    #[must_use]
    pub fn with_draw_start(mut self, draw_start: DrawStart) -> Self {
        self.draw_start = draw_start;
        self
    }

    /// Start drawing at shuffle position 13.
    #[must_use]
    pub fn skip_reserved(self) -> Self {
        self.with_draw_start(DrawStart::SkipReserved)
    }

    /// Build the RNG described by this configuration.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.draw_start, DrawStart::Next);
        assert_eq!(config.draw_start.cursor(), 12);
    }

    #[test]
    fn test_skip_reserved_cursor() {
        let config = EngineConfig::new().skip_reserved();
        assert_eq!(config.draw_start.cursor(), 13);
    }

    #[test]
    fn test_seeded_rng() {
        let config = EngineConfig::new().with_seed(99);
        assert_eq!(config.rng().seed(), 99);
    }

    #[test]
    fn test_config_serde() {
        let config = EngineConfig::new()
            .with_seed(5)
            .with_draw_start(DrawStart::SkipReserved);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
