//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the bordered board (each cell two columns wide, drawn
//! on a dot grid with `[]` blocks), then two HUD lines. A game-over overlay is
//! drawn over the middle of the board.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const BLACK: Rgb = Rgb::new(0, 0, 0);
const OUTLINE: Rgb = Rgb::new(238, 238, 238);
const DOT: Rgb = Rgb::new(68, 68, 68);

const EMPTY_GLYPH: [char; 2] = ['·', ' '];
const BLOCK_GLYPH: [char; 2] = ['[', ']'];

/// Rows below the board frame used by the HUD
const HUD_ROWS: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    text: CellStyle,
    block: CellStyle,
    active: CellStyle,
    dot: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        let text = CellStyle::new(OUTLINE, BLACK);
        Self {
            text,
            block: text,
            active: text.bold(),
            dot: CellStyle::new(DOT, BLACK),
        }
    }
}

impl GameView {
    /// Board frame size in terminal cells (border included)
    pub fn frame_size() -> (u16, u16) {
        (BOARD_WIDTH as u16 * 2 + 2, BOARD_HEIGHT as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell {
            ch: ' ',
            style: self.text,
        });

        let (w, h) = Self::frame_size();
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h + HUD_ROWS) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let glyph = if snap.board[y as usize][x as usize] != 0 {
                    (BLOCK_GLYPH, self.block)
                } else {
                    (EMPTY_GLYPH, self.dot)
                };
                draw_cell(fb, frame, x as u16, y as u16, glyph.0, glyph.1);
            }
        }

        for &(x, y) in snap.active_cells.iter() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                draw_cell(fb, frame, x as u16, y as u16, BLOCK_GLYPH, self.active);
            }
        }

        self.draw_hud(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = self.text;
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);
        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let mode = if snap.fast_mode { "FAST" } else { "NORMAL" };
        let mirror = on_off(snap.mirrored);
        let sound = on_off(snap.sound_enabled);

        // SCORE: <n>   MODE: <mode>   MIRROR: <on/off>
        let line_w = 7 + digit_count(snap.score) + 9 + mode.len() as u16 + 11 + mirror.len() as u16;
        let y = f.y + f.h;
        let mut x = centered(viewport.width, line_w);
        x = fb.put_str(x, y, "SCORE: ", self.text);
        x = fb.put_u32(x, y, snap.score, self.text);
        x = fb.put_str(x, y, "   MODE: ", self.text);
        x = fb.put_str(x, y, mode, self.text);
        x = fb.put_str(x, y, "   MIRROR: ", self.text);
        fb.put_str(x, y, mirror, self.text);

        // LINES: <n>   SOUND: <on/off>
        let line_w = 7 + digit_count(snap.lines) + 10 + sound.len() as u16;
        let y = y + 1;
        let mut x = centered(viewport.width, line_w);
        x = fb.put_str(x, y, "LINES: ", self.text);
        x = fb.put_u32(x, y, snap.lines, self.text);
        x = fb.put_str(x, y, "   SOUND: ", self.text);
        fb.put_str(x, y, sound, self.text);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = self.text.bold();
        let mid_y = f.y + f.h / 2;
        for (dy, text) in ["GAME OVER", "PRESS R TO RESTART"].iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(text_w) / 2;
            let y = mid_y - 1 + dy as u16;
            fb.put_str(x.saturating_sub(1), y, " ", style);
            let end = fb.put_str(x, y, text, style);
            fb.put_str(end, y, " ", style);
        }
    }
}

fn draw_cell(fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, glyph: [char; 2], style: CellStyle) {
    let px = f.x + 1 + x * 2;
    let py = f.y + 1 + y;
    fb.put_char(px, py, glyph[0], style);
    fb.put_char(px + 1, py, glyph[1], style);
}

fn centered(total: u16, len: u16) -> u16 {
    total.saturating_sub(len) / 2
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}
