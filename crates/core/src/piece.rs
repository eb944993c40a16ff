//! Active falling piece.
//!
//! The piece only stores its configuration; occupied cells are always derived
//! from it through [`get_shape`].

use crate::board::Board;
use crate::shape::{get_shape, PieceShape};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Clockwise quarter turns, kept in 0..4
    pub rotation: u8,
    pub mirrored: bool,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new piece at the spawn anchor, unrotated and unmirrored
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            mirrored: false,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Normalized frame-relative cells for the current configuration
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation as i32, self.mirrored)
    }

    /// Absolute board cells
    pub fn cells(&self) -> PieceShape {
        self.shape()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        board.can_place(self.kind, self.rotation as i32, self.mirrored, self.x, self.y)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Same anchor, one more clockwise quarter turn
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % 4,
            ..*self
        }
    }

    pub fn with_mirror(&self, mirrored: bool) -> Self {
        Self { mirrored, ..*self }
    }

    /// Write this piece into the board
    pub(crate) fn lock_into(&self, board: &mut Board) {
        board.lock(self.kind, self.rotation as i32, self.mirrored, self.x, self.y);
    }
}
