//! TETRIS 80S PLUS terminal runner.
//!
//! Owns the timer driver: the game is ticked every `tick_interval_ms()`
//! (normal, fast or game-over cadence), and the timer is re-armed whenever that
//! interval changes, i.e. when a new piece spawns or the game ends.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris80::cli::{load_config, parse_args, USAGE};
use tetris80::core::{forward_events, GameState, StdRandom};
use tetris80::input::{handle_key_event, repeats_on_hold, should_quit};
use tetris80::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tetris80::trace::EventTrace;
use tetris80::types::GameEvent;

type Trace = EventTrace<BufWriter<File>>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    if opts.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = load_config(opts.config_path.as_deref())?;
    let rng = match opts.seed {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::from_entropy(),
    };
    let mut game = GameState::with_rng(config, rng);
    if opts.mute {
        game.toggle_sound();
    }
    let mut trace = opts
        .trace_path
        .as_deref()
        .map(Trace::open)
        .transpose()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, trace.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(trace) = trace.as_mut() {
        trace.flush()?;
    }
    result
}

struct Session<'a> {
    game: &'a mut GameState,
    bell: TerminalBell,
    trace: Option<&'a mut Trace>,
}

impl Session<'_> {
    fn dispatch(&mut self, events: &[GameEvent]) -> Result<()> {
        forward_events(events, self.game.sound_enabled(), &mut self.bell);
        if let Some(trace) = self.trace.as_mut() {
            trace.record(events, self.game.score(), self.game.game_over())?;
        }
        Ok(())
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, trace: Option<&mut Trace>) -> Result<()> {
    let mut session = Session {
        game,
        bell: TerminalBell::new(),
        trace,
    };

    let view = GameView::default();
    let mut snapshot = session.game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let mut interval_ms = session.game.tick_interval_ms();
    let mut last_tick = Instant::now();

    loop {
        session.game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        let tick_duration = Duration::from_millis(interval_ms as u64);
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    let action = match (handle_key_event(key), key.kind) {
                        (Some(action), KeyEventKind::Press) => Some(action),
                        (Some(action), KeyEventKind::Repeat) if repeats_on_hold(action) => {
                            Some(action)
                        }
                        _ => None,
                    };
                    if let Some(action) = action {
                        let events = session.game.apply_action(action);
                        session.dispatch(&events)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let events = session.game.tick();
            session.dispatch(&events)?;
        }

        let current = session.game.tick_interval_ms();
        if current != interval_ms {
            interval_ms = current;
            last_tick = Instant::now();
        }
    }
}
