//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has **no** dependency
//! on terminal, audio or file I/O:
//!
//! - **Deterministic**: the same seed (or scripted [`RandomSource`]) replays the same game
//! - **Synchronous**: every command completes before returning, including hard drop
//! - **Allocation-free commands**: events come back in a fixed-capacity [`Events`] list
//!
//! # Module Structure
//!
//! - [`shape`]: canonical piece cells, mirror/rotate/normalize transforms, kick search
//! - [`board`]: 10x20 grid with placement checks, locking and line clearing
//! - [`piece`]: the active piece (kind, rotation, mirror flag, anchor)
//! - [`game_state`]: the controller state machine
//! - [`rng`]: spawn randomness behind a trait
//! - [`scoring`]: `100 * lines²` line-clear points
//! - [`config`]: fall intervals and fast-piece chance
//! - [`notify`]: notifier boundary for event cues
//! - [`snapshot`]: what the renderer reads
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 0), unrotated and unmirrored, chosen uniformly at random
//! - 18% of pieces are **fast** and fall every 80ms instead of every 450ms
//! - Rotation and mirroring try the piece in place, then shifted by -1, +1, -2, +2 columns
//! - A piece locks only when a downward move is blocked
//! - The game ends when a new piece does not fit at the spawn anchor
//!
//! # Example
//!
//! ```
//! use tetris80_core::GameState;
//! use tetris80_core::types::{GameAction, GameEvent};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! let events = game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(events[0], GameEvent::Lock);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod notify;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tetris80_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::{Events, GameState};
pub use notify::{forward_events, Notifier, NullNotifier, RecordingNotifier};
pub use piece::Tetromino;
pub use rng::{RandomSource, ScriptedRandom, StdRandom};
pub use scoring::line_clear_score;
pub use shape::{get_shape, PieceShape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
