//! Render snapshot: everything the renderer reads, copied out of the controller.

use arrayvec::ArrayVec;

use crate::piece::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub mirrored: bool,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            mirrored: value.mirrored,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise the kind id of the piece that filled the cell
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Absolute cells of the active piece; empty when the game is over
    pub active_cells: ArrayVec<(i8, i8), 4>,
    pub score: u32,
    pub lines: u32,
    pub fast_mode: bool,
    /// Always false when the game is over
    pub mirrored: bool,
    pub game_over: bool,
    pub sound_enabled: bool,
    pub tick_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            active_cells: ArrayVec::new(),
            score: 0,
            lines: 0,
            fast_mode: false,
            mirrored: false,
            game_over: false,
            sound_enabled: true,
            tick_interval_ms: 0,
        }
    }
}
