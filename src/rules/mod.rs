//! Game rules: set validation and board search.

pub mod set_rule;

pub use set_rule::{find_set, is_set, third_card};
