//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The bindings
//! are fixed; there is no remapping.

pub mod map;

pub use tetris80_types as types;

pub use map::{handle_key_event, repeats_on_hold, should_quit};
