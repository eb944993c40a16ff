//! Game state module - the controller
//!
//! Ties together board, pieces, spawn randomness and scoring. Every command runs
//! to completion synchronously and returns the [`GameEvent`]s it produced, in
//! order, so the caller can forward them to a notifier.
//!
//! The game is either playing or over. Once over, only `reset` and
//! `toggle_sound` do anything; ticks keep arriving (at a fixed idle cadence)
//! but change nothing.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Tetromino;
use crate::rng::{RandomSource, StdRandom};
use crate::scoring::line_clear_score;
use crate::shape::find_kick;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameEvent};

/// Events produced by a single command (at most lock, clear, game over)
pub type Events = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRandom> {
    board: Board,
    /// `None` only while the game is over
    active: Option<Tetromino>,
    score: u32,
    lines: u32,
    pieces_spawned: u32,
    /// Rolled at spawn, fixed for the piece's lifetime
    fast_mode: bool,
    game_over: bool,
    sound_enabled: bool,
    config: GameConfig,
    rng: R,
}

impl GameState<StdRandom> {
    /// Start a game with default tuning and a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), StdRandom::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a game on an empty board with the given tuning and randomness
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self::with_board(Board::new(), config, rng)
    }

    /// Start a game on a prepared board.
    ///
    /// The first piece spawns immediately; if the spawn anchor is blocked the
    /// game is over from the start.
    pub fn with_board(board: Board, config: GameConfig, rng: R) -> Self {
        let mut state = Self {
            board,
            active: None,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            fast_mode: false,
            game_over: false,
            sound_enabled: true,
            config,
            rng,
        };
        let mut events = Events::new();
        state.spawn_into(&mut events);
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lines cleared since the game started
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn fast_mode(&self) -> bool {
        self.fast_mode
    }

    /// Mirror flag of the active piece; false when the game is over
    pub fn mirrored(&self) -> bool {
        self.active.is_some_and(|p| p.mirrored)
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    /// Milliseconds until the timer driver should call [`GameState::tick`] again
    pub fn tick_interval_ms(&self) -> u32 {
        if self.game_over {
            self.config.game_over_interval_ms
        } else if self.fast_mode {
            self.config.fast_interval_ms
        } else {
            self.config.normal_interval_ms
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.active_cells.clear();
        if let Some(active) = self.active {
            out.active_cells.extend(active.cells());
        }
        out.score = self.score;
        out.lines = self.lines;
        out.fast_mode = self.fast_mode;
        out.mirrored = self.mirrored();
        out.game_over = self.game_over;
        out.sound_enabled = self.sound_enabled;
        out.tick_interval_ms = self.tick_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a freshly drawn one
    pub fn spawn_piece(&mut self) -> Events {
        let mut events = Events::new();
        if !self.game_over {
            self.spawn_into(&mut events);
        }
        events
    }

    fn spawn_into(&mut self, events: &mut Events) {
        let kind = self.rng.pick_kind();
        self.fast_mode = self.rng.roll_fast(self.config.fast_piece_chance);

        let piece = Tetromino::spawn(kind);
        if !piece.is_valid(&self.board) {
            self.active = None;
            self.game_over = true;
            events.push(GameEvent::GameOver);
            return;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
    }

    /// Move the active piece by (dx, dy).
    ///
    /// A blocked move straight down locks the piece instead; any other blocked
    /// move is ignored.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> Events {
        let mut events = Events::new();
        self.move_into(dx, dy, &mut events);
        events
    }

    fn move_into(&mut self, dx: i8, dy: i8, events: &mut Events) {
        if self.game_over {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let moved = active.shifted(dx, dy);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
            return;
        }

        if dx == 0 && dy == 1 {
            self.lock_piece(events);
        }
    }

    /// Lock the active piece, clear lines, score them, spawn the next piece
    fn lock_piece(&mut self, events: &mut Events) {
        let Some(active) = self.active.take() else {
            return;
        };

        active.lock_into(&mut self.board);
        events.push(GameEvent::Lock);

        let (board, cleared) = self.board.clear_lines();
        self.board = board;
        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_score(cleared));
            self.lines = self.lines.saturating_add(cleared as u32);
            events.push(GameEvent::Clear);
        }

        self.spawn_into(events);
    }

    /// Rotate a quarter turn clockwise, kicking sideways if needed
    pub fn try_rotate(&mut self) -> Events {
        match self.playing_piece() {
            Some(active) => self.commit_with_kick(active.rotated()),
            None => Events::new(),
        }
    }

    /// Flip left/right, kicking sideways if needed
    pub fn toggle_mirror(&mut self) -> Events {
        match self.playing_piece() {
            Some(active) => self.commit_with_kick(active.with_mirror(!active.mirrored)),
            None => Events::new(),
        }
    }

    fn playing_piece(&self) -> Option<Tetromino> {
        if self.game_over {
            None
        } else {
            self.active
        }
    }

    fn commit_with_kick(&mut self, candidate: Tetromino) -> Events {
        let mut events = Events::new();
        let board = &self.board;
        if let Some(dx) = find_kick(|dx| candidate.shifted(dx, 0).is_valid(board)) {
            self.active = Some(candidate.shifted(dx, 0));
            events.push(GameEvent::Click);
        }
        events
    }

    /// Drop the piece as far as it goes, then lock it
    pub fn hard_drop(&mut self) -> Events {
        let mut events = Events::new();
        if self.game_over {
            return events;
        }
        let Some(mut active) = self.active else {
            return events;
        };

        while active.shifted(0, 1).is_valid(&self.board) {
            active = active.shifted(0, 1);
        }
        self.active = Some(active);

        // Blocked below now, so this locks.
        self.move_into(0, 1, &mut events);
        events
    }

    /// Gravity step; nothing happens once the game is over
    pub fn tick(&mut self) -> Events {
        let mut events = Events::new();
        if !self.game_over {
            self.move_into(0, 1, &mut events);
        }
        events
    }

    pub fn toggle_sound(&mut self) -> Events {
        self.sound_enabled = !self.sound_enabled;
        let mut events = Events::new();
        events.push(GameEvent::Click);
        events
    }

    /// Start a new game: empty board, zero score, fresh piece.
    ///
    /// The sound setting is kept.
    pub fn reset(&mut self) -> Events {
        self.board = Board::new();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.fast_mode = false;
        self.game_over = false;

        let mut events = Events::new();
        self.spawn_into(&mut events);
        events
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Events {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::ToggleMirror => self.toggle_mirror(),
            GameAction::ToggleSound => self.toggle_sound(),
            GameAction::Reset => self.reset(),
        }
    }
}

impl Default for GameState<StdRandom> {
    fn default() -> Self {
        Self::new(1)
    }
}
