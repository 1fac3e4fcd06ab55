//! The deck engine: dealing, selection and set resolution.
//!
//! ## Lifecycle
//!
//! 1. Construction builds the universe, seeds the RNG once, shuffles, deals
//!    shuffle positions 0..12 into the window and places the draw cursor.
//! 2. Every `click` toggles one slot. The third selected slot triggers
//!    resolution: a valid set is replaced from the draw pile, an invalid one
//!    is left in place. The selection is cleared either way.
//! 3. Once the pile is exhausted, cleared slots stay empty.
//!
//! ## Usage
//!
//! ```
//! use open_set::core::EngineConfig;
//! use open_set::engine::{ClickOutcome, DeckEngine};
//!
//! let mut engine = DeckEngine::new(EngineConfig::new().with_seed(42));
//! assert_eq!(engine.get_deck().iter().flatten().count(), 12);
//!
//! if let Some([a, b, c]) = engine.find_set() {
//!     engine.click(a);
//!     engine.click(b);
//!     let outcome = engine.click(c);
//!     assert!(matches!(outcome, ClickOutcome::SetFound { dealt: 3, .. }));
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::selection::{Selection, Toggle, SET_SIZE};
use crate::cards::{Card, CardIndex, Universe};
use crate::core::config::{DrawStart, EngineConfig};
use crate::core::error::EngineError;
use crate::rules;
use crate::zones::{DrawPile, ShuffleOrder, Window, WINDOW_SIZE};

/// What a single click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The slot joined the selection.
    Selected { slot: usize },
    /// The slot left the selection.
    Deselected { slot: usize },
    /// The three selected slots formed a set and were replenished.
    ///
    /// `dealt` is how many of them received a new card; the rest are empty.
    SetFound { slots: [usize; SET_SIZE], dealt: usize },
    /// The three selected slots did not form a set.
    NotASet { slots: [usize; SET_SIZE] },
}

/// Serializable view of the engine for a rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Seed of the shuffle, for replaying the deal.
    pub seed: Option<u64>,
    /// Slot contents in slot order.
    pub slots: Vec<Option<Card>>,
    /// Selected slots in selection order.
    pub selected: Vec<usize>,
    /// Next shuffle position to deal.
    pub cursor: usize,
    /// Cards left to deal.
    pub remaining: usize,
}

/// Owns the universe, shuffle order, window, draw cursor and selection.
///
/// Nothing outside the engine mutates this state: renderers read it with
/// `get_deck`/`get_card`/`is_selected` and input layers write it with
/// `click`.
#[derive(Clone, Debug)]
pub struct DeckEngine {
    universe: Universe,
    pile: DrawPile,
    window: Window,
    selection: Selection,
    seed: Option<u64>,
}

impl DeckEngine {
    /// Start a game with a fresh shuffle.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = config.rng();
        let order = ShuffleOrder::new(&mut rng);
        let mut engine = Self::with_order(order, config.draw_start);
        engine.seed = Some(rng.seed());
        engine
    }

    /// Start a game from a known shuffle order.
    #[must_use]
    pub fn with_order(order: ShuffleOrder, draw_start: DrawStart) -> Self {
        let window = Window::deal(order.as_slice().iter().copied());
        let pile = DrawPile::new(order, draw_start.cursor());

        debug!(
            ?draw_start,
            cursor = pile.cursor(),
            remaining = pile.remaining(),
            "dealt initial window"
        );

        Self {
            universe: Universe::new(),
            pile,
            window,
            selection: Selection::new(),
            seed: None,
        }
    }

    // === Queries ===

    /// Current contents of all 12 slots, in slot order.
    #[must_use]
    pub fn get_deck(&self) -> [Option<Card>; WINDOW_SIZE] {
        let mut deck = [None; WINDOW_SIZE];
        for (out, slot) in deck.iter_mut().zip(self.window.iter()) {
            *out = slot.map(|index| self.universe.get(index));
        }
        deck
    }

    /// Card in `slot`, or `None` if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 12`.
    #[must_use]
    pub fn get_card(&self, slot: usize) -> Option<Card> {
        match self.try_get_card(slot) {
            Ok(card) => card,
            Err(err) => panic!("{err}"),
        }
    }

    /// Card in `slot`, reporting an out-of-range slot as an error.
    pub fn try_get_card(&self, slot: usize) -> Result<Option<Card>, EngineError> {
        check_slot(slot)?;
        Ok(self.window.get(slot).map(|index| self.universe.get(index)))
    }

    /// Universe index of the card in `slot`.
    #[must_use]
    pub fn card_index(&self, slot: usize) -> Option<CardIndex> {
        self.window.get(slot)
    }

    /// Is `slot` part of the pending selection?
    #[must_use]
    pub fn is_selected(&self, slot: usize) -> bool {
        self.selection.contains(slot)
    }

    /// Pending selection in selection order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        self.selection.as_slice()
    }

    /// Next shuffle position to deal.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.pile.cursor()
    }

    /// Cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pile.remaining()
    }

    /// Shuffle seed, if the engine shuffled for itself.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The shuffle order of this game.
    #[must_use]
    pub fn shuffle_order(&self) -> &ShuffleOrder {
        self.pile.order()
    }

    /// First set visible on the board, as ascending slots.
    #[must_use]
    pub fn find_set(&self) -> Option<[usize; SET_SIZE]> {
        rules::find_set(&self.get_deck())
    }

    /// Is any set visible on the board?
    #[must_use]
    pub fn has_set(&self) -> bool {
        self.find_set().is_some()
    }

    /// No cards left to deal and no set left on the board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pile.is_exhausted() && !self.has_set()
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            seed: self.seed,
            slots: self.get_deck().to_vec(),
            selected: self.selection.as_slice().to_vec(),
            cursor: self.pile.cursor(),
            remaining: self.pile.remaining(),
        }
    }

    // === Input ===

    /// Toggle `slot` and resolve once three slots are selected.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 12`, if the slot is empty, or if a fourth slot
    /// would be selected. These are bugs in the input layer.
    pub fn click(&mut self, slot: usize) -> ClickOutcome {
        match self.try_click(slot) {
            Ok(outcome) => outcome,
            Err(err) => panic!("invalid click on slot {slot}: {err}"),
        }
    }

    /// Toggle `slot` and resolve once three slots are selected.
    ///
    /// On error the engine state is unchanged.
    pub fn try_click(&mut self, slot: usize) -> Result<ClickOutcome, EngineError> {
        check_slot(slot)?;
        if self.window.get(slot).is_none() {
            return Err(EngineError::EmptySlot { slot });
        }

        let toggle = self.selection.toggle(slot)?;
        trace!(slot, ?toggle, selected = ?self.selection.as_slice(), "toggled slot");

        if toggle == Toggle::Removed {
            return Ok(ClickOutcome::Deselected { slot });
        }
        if !self.selection.is_full() {
            return Ok(ClickOutcome::Selected { slot });
        }
        Ok(self.resolve())
    }

    /// Evaluate the full selection, replenish on success, clear it.
    fn resolve(&mut self) -> ClickOutcome {
        let mut slots = [0; SET_SIZE];
        slots.copy_from_slice(self.selection.as_slice());
        self.selection.clear();

        // Empty slots are rejected by `try_click`, so all three are present.
        let cards = slots.map(|slot| self.window.get(slot).map(|index| self.universe.get(index)));
        let [Some(a), Some(b), Some(c)] = cards else {
            return ClickOutcome::NotASet { slots };
        };

        if !rules::is_set(&a, &b, &c) {
            debug!(?slots, "selection is not a set");
            return ClickOutcome::NotASet { slots };
        }

        let was_exhausted = self.pile.is_exhausted();
        let mut dealt = 0;
        for slot in slots {
            let next = self.pile.draw();
            dealt += usize::from(next.is_some());
            self.window.set(slot, next);
        }

        debug!(
            ?slots,
            dealt,
            cursor = self.pile.cursor(),
            "set cleared"
        );
        if !was_exhausted && self.pile.is_exhausted() {
            info!(
                empty_slots = WINDOW_SIZE - self.window.occupied(),
                "draw pile exhausted"
            );
        }

        ClickOutcome::SetFound { slots, dealt }
    }
}

fn check_slot(slot: usize) -> Result<(), EngineError> {
    if slot < WINDOW_SIZE {
        Ok(())
    } else {
        Err(EngineError::SlotOutOfRange {
            slot,
            len: WINDOW_SIZE,
        })
    }
}
