//! Shape module - piece geometry inside a 4x4 frame
//!
//! Every piece kind has one canonical cell set. Rotations and mirror images are
//! derived from it with three pure transforms:
//!
//! - mirror: `(x, y) -> (3 - x, y)`
//! - rotate 90° clockwise: `(x, y) -> (3 - y, x)`
//! - normalize: shift so the smallest x and the smallest y are both 0
//!
//! The mirror is applied first, then `rotation mod 4` clockwise steps.

use crate::types::{PieceKind, KICK_OFFSETS};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Canonical cells of each kind, before any transform
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceKind::O => [(1, 1), (2, 1), (1, 2), (2, 2)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(0, 0), (0, 1), (0, 2), (1, 2)],
        PieceKind::J => [(1, 0), (1, 1), (1, 2), (0, 2)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Reflect left/right within the 4-wide frame
pub fn mirror_x(shape: PieceShape) -> PieceShape {
    shape.map(|(x, y)| (3 - x, y))
}

/// One 90° clockwise step within the 4x4 frame
pub fn rotate_cw(shape: PieceShape) -> PieceShape {
    shape.map(|(x, y)| (3 - y, x))
}

/// Shift cells so they are packed against the top-left corner of the frame
pub fn normalize(shape: PieceShape) -> PieceShape {
    let min_x = shape.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = shape.iter().map(|&(_, y)| y).min().unwrap_or(0);
    shape.map(|(x, y)| (x - min_x, y - min_y))
}

/// Reduce any rotation index (negative or large) to 0..4
#[inline]
pub fn rotation_steps(rotation: i32) -> u8 {
    rotation.rem_euclid(4) as u8
}

/// Get the normalized shape for a piece kind, rotation index and mirror flag
///
/// Total for every rotation index.
///
/// # Examples
///
/// ```
/// use tetris80_core::shape::get_shape;
/// use tetris80_core::types::PieceKind;
///
/// // Vertical I after one clockwise step.
/// assert_eq!(get_shape(PieceKind::I, 1, false), [(0, 0), (0, 1), (0, 2), (0, 3)]);
/// // -1 is the same as 3.
/// assert_eq!(get_shape(PieceKind::T, -1, true), get_shape(PieceKind::T, 3, true));
/// ```
pub fn get_shape(kind: PieceKind, rotation: i32, mirrored: bool) -> PieceShape {
    let mut cells = base_shape(kind);
    if mirrored {
        cells = mirror_x(cells);
    }
    for _ in 0..rotation_steps(rotation) {
        cells = rotate_cw(cells);
    }
    normalize(cells)
}

/// Move a frame-relative cell to board coordinates; `None` if it overflows `i8`
#[inline]
pub fn translate((dx, dy): MinoOffset, x: i8, y: i8) -> Option<(i8, i8)> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Find the first horizontal offset at which a transformed piece fits.
///
/// Tries the piece in place first, then every entry of [`KICK_OFFSETS`] in
/// order. `fits(dx)` reports whether the candidate fits when shifted by `dx`.
/// Returns the winning offset, or `None` if nothing fits.
pub fn find_kick(mut fits: impl FnMut(i8) -> bool) -> Option<i8> {
    std::iter::once(0)
        .chain(KICK_OFFSETS.iter().copied())
        .find(|&dx| fits(dx))
}
