//! TETRIS 80S PLUS (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/` and is re-exported
//! here as `tetris80::{core,input,term,types}`. This crate adds the pieces only
//! the binary needs: command-line options with config loading ([`cli`]) and the
//! JSON-lines event trace ([`trace`]).

pub mod cli;
pub mod trace;

pub use tetris80_core as core;
pub use tetris80_input as input;
pub use tetris80_term as term;
pub use tetris80_types as types;
