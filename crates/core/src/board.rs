//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use crate::shape::{get_shape, translate};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether a piece in the given configuration fits: every cell inside the
    /// board and on an empty cell.
    ///
    /// Total over every anchor; cells whose coordinates overflow `i8` do not fit.
    pub fn can_place(&self, kind: PieceKind, rotation: i32, mirrored: bool, x: i8, y: i8) -> bool {
        get_shape(kind, rotation, mirrored)
            .iter()
            .all(|&offset| match translate(offset, x, y) {
                Some((cx, cy)) => self.is_valid(cx, cy),
                None => false,
            })
    }

    /// Write a piece into the board.
    ///
    /// Callers check [`Board::can_place`] for the same configuration first;
    /// cells that fall outside the board are skipped.
    pub fn lock(&mut self, kind: PieceKind, rotation: i32, mirrored: bool, x: i8, y: i8) {
        debug_assert!(self.can_place(kind, rotation, mirrored, x, y));
        for &offset in get_shape(kind, rotation, mirrored).iter() {
            if let Some((cx, cy)) = translate(offset, x, y) {
                self.set(cx, cy, Some(kind));
            }
        }
    }

    /// Remove every full row and return the compacted board with the number
    /// of rows removed.
    ///
    /// Remaining rows keep their order and move down; the same number of
    /// empty rows appears at the top. Uses a bottom-up two-pointer scan.
    pub fn clear_lines(&self) -> (Board, usize) {
        let mut out = Board::new();
        let mut write_y = HEIGHT;
        let mut cleared = 0;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            let src = read_y * WIDTH;
            let dst = write_y * WIDTH;
            out.cells[dst..dst + WIDTH].copy_from_slice(&self.cells[src..src + WIDTH]);
        }

        (out, cleared)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export as a `u8` grid: 0 = empty, otherwise [`PieceKind::id`].
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * WIDTH + x].map_or(0, |kind| kind.id());
            }
        }
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` or space is empty; any other character is a filled cell. Missing
    /// rows at the top are empty, so a short slice describes the bottom of
    /// the board. Extra rows and columns are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Board::new();
        let skip = rows.len().saturating_sub(HEIGHT);
        let top = HEIGHT - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                if ch != '.' && ch != ' ' {
                    let kind = PieceKind::from_char(ch).unwrap_or(PieceKind::I);
                    board.cells[(top + i) * WIDTH + x] = Some(kind);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
