//! Terminal bell notifier: one BEL per event cue.

use std::io::{self, Stdout, Write};

use crate::core::Notifier;
use crate::types::GameEvent;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell (BEL) once per event cue.
///
/// Every event kind maps to the same cue. Write errors are ignored: a
/// missing bell must never interrupt the game.
pub struct TerminalBell<W: Write = Stdout> {
    out: W,
    rung: u64,
}

impl TerminalBell<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalBell<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, rung: 0 }
    }

    /// Number of cues played so far.
    pub fn rung(&self) -> u64 {
        self.rung
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalBell<W> {
    fn notify(&mut self, _event: GameEvent) {
        self.rung += 1;
        let _ = self.out.write_all(BEL).and_then(|_| self.out.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forward_events;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_one_bel_per_event() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        forward_events(&[GameEvent::Lock, GameEvent::Clear], true, &mut bell);
        assert_eq!(bell.rung(), 2);
        assert_eq!(bell.into_inner(), b"\x07\x07");
    }

    #[test]
    fn test_muted_rings_nothing() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        forward_events(&[GameEvent::Click], false, &mut bell);
        assert!(bell.into_inner().is_empty());
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let mut bell = TerminalBell::with_writer(BrokenPipe);
        bell.notify(GameEvent::GameOver);
        assert_eq!(bell.rung(), 1);
    }
}
