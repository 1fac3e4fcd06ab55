//! Caller-contract violations reported by the fallible engine API.

use thiserror::Error;

/// Errors returned by `try_*` operations.
///
/// Every variant is a bug in the calling layer, never an environmental
/// failure. The panicking counterparts (`click`, `get_card`) abort with the
/// same message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("slot {slot} is out of range (window has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },
    #[error("slot {slot} holds no card")]
    EmptySlot { slot: usize },
    #[error("three cards are already selected")]
    SelectionFull,
    #[error("invalid shuffle order: {0}")]
    InvalidShuffleOrder(String),
}
