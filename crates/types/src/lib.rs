//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, input mapping, event tracing).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0) for every piece
//!
//! # Timing Constants
//!
//! The timer driver calls `tick` once per interval (milliseconds):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 450 | Fall interval of a normal piece |
//! | `FAST_TICK_MS` | 80 | Fall interval of a fast piece |
//! | `GAME_OVER_TICK_MS` | 250 | Idle cadence while the game is over |
//!
//! # Examples
//!
//! ```
//! use tetris80_types::{GameAction, GameEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_char('t'), Some(PieceKind::T));
//! assert_ne!(GameAction::Rotate, GameAction::ToggleMirror);
//! assert_eq!(serde_json::to_string(&GameEvent::GameOver).unwrap(), r#""game_over""#);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column for new pieces
pub const SPAWN_X: i8 = 3;

/// Spawn anchor row for new pieces
pub const SPAWN_Y: i8 = 0;

/// Fall interval of a normal piece (450ms per row)
pub const BASE_TICK_MS: u32 = 450;

/// Fall interval of a fast piece (80ms per row)
pub const FAST_TICK_MS: u32 = 80;

/// Tick cadence while the game is over (rendering only, no state changes)
pub const GAME_OVER_TICK_MS: u32 = 250;

/// Probability that a freshly spawned piece is a fast piece
pub const FAST_PIECE_CHANCE: f64 = 0.18;

/// Points for a line clear: `LINE_CLEAR_BASE * lines * lines`
pub const LINE_CLEAR_BASE: u32 = 100;

/// Horizontal kick offsets tried, in order, when a rotation or mirror toggle
/// does not fit in place.
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_TICK_MS, 450);
        assert_eq!(FAST_TICK_MS, 80);
        assert_eq!(GAME_OVER_TICK_MS, 250);
        assert!((FAST_PIECE_CHANCE - 0.18).abs() < f64::EPSILON);
    }

    #[test]
    fn kick_order_is_left_first() {
        assert_eq!(KICK_OFFSETS, [-1, 1, -2, 2]);
    }

    #[test]
    fn piece_kind_ids_are_distinct_and_non_zero() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let id = kind.id() as usize;
            assert!(id != 0 && !seen[id], "{:?}", kind);
            seen[id] = true;
        }
    }

    #[test]
    fn piece_kind_from_char() {
        for (ch, kind) in "IOTLJSZ".chars().zip(PieceKind::ALL) {
            assert_eq!(PieceKind::from_char(ch), Some(kind));
            assert_eq!(PieceKind::from_char(ch.to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char('.'), None);
    }

    #[test]
    fn events_serialize_snake_case() {
        let names: Vec<String> = [
            GameEvent::Click,
            GameEvent::Lock,
            GameEvent::Clear,
            GameEvent::GameOver,
        ]
        .iter()
        .map(|e| serde_json::to_string(e).unwrap())
        .collect();
        assert_eq!(names, [r#""click""#, r#""lock""#, r#""clear""#, r#""game_over""#]);
    }
}

/// The seven piece kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L** / **J**: L-shaped, mirror images of each other
/// - **S** / **Z**: skew pieces, mirror images of each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in the order used for uniform random selection
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse a piece letter (case-insensitive), as used in text board fixtures
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris80_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('L'), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_char('#'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Non-zero id used in `u8` board grids (0 means empty)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Commands the input adapter can send to the game controller
///
/// Each action maps 1:1 to a controller command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise (with horizontal kicks)
    Rotate,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Flip the piece left/right (with horizontal kicks)
    ToggleMirror,
    /// Turn sound cues on or off
    ToggleSound,
    /// Start a new game
    Reset,
}

/// Notification emitted by the controller for the audio boundary.
///
/// The set is closed; a notifier is free to ignore any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// Successful rotation/mirror, or sound toggle
    Click,
    /// Piece written into the board
    Lock,
    /// One or more lines removed
    Clear,
    /// Spawn blocked, game ended
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled cell (the kind is kept for drawing only)
pub type Cell = Option<PieceKind>;
