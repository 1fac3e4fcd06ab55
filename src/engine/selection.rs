//! Multi-select state for the visible window.
//!
//! Selection lives in the engine, not on the cards: a renderer asks the
//! engine whether a slot is selected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::EngineError;

/// Number of cards in a set, and the selection cap.
pub const SET_SIZE: usize = 3;

/// Result of toggling one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered list of 0-3 distinct selected slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    slots: SmallVec<[usize; SET_SIZE]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `slot` if unselected, deselect it otherwise.
    ///
    /// Deselecting keeps the relative order of the remaining slots.
    /// Selecting a fourth slot is refused with `SelectionFull`.
    pub fn toggle(&mut self, slot: usize) -> Result<Toggle, EngineError> {
        if let Some(pos) = self.slots.iter().position(|&s| s == slot) {
            self.slots.remove(pos);
            return Ok(Toggle::Removed);
        }
        if self.is_full() {
            return Err(EngineError::SelectionFull);
        }
        self.slots.push(slot);
        Ok(Toggle::Added)
    }

    /// Is `slot` selected?
    #[must_use]
    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(&slot)
    }

    /// Number of selected slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when three slots are selected.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == SET_SIZE
    }

    /// Selected slots in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
