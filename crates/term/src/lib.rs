//! Terminal presentation for the game: framebuffer renderer and bell cues.
//!
//! Rendering is split in two:
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes framebuffers to the terminal, redrawing only changed runs
//!
//! [`TerminalBell`] is the audio notifier: it rings the terminal bell for each
//! event cue and ignores any I/O failure.

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris80_core as core;
pub use tetris80_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
