//! JSON-lines event trace.
//!
//! One object per emitted event:
//! `{"seq":3,"event":"clear","score":100,"game_over":false}`

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    pub seq: u64,
    pub event: GameEvent,
    pub score: u32,
    pub game_over: bool,
}

pub struct EventTrace<W: Write> {
    out: W,
    seq: u64,
}

impl EventTrace<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening trace {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, seq: 0 }
    }

    /// Records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Write one line per event; `score`/`game_over` are read after the command.
    pub fn record(&mut self, events: &[GameEvent], score: u32, game_over: bool) -> Result<()> {
        for &event in events {
            self.seq += 1;
            let record = TraceRecord {
                seq: self.seq,
                event,
                score,
                game_over,
            };
            serde_json::to_writer(&mut self.out, &record)?;
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_event() {
        let mut trace = EventTrace::new(Vec::new());
        trace
            .record(&[GameEvent::Lock, GameEvent::Clear], 100, false)
            .unwrap();
        trace.record(&[], 100, false).unwrap();
        trace.record(&[GameEvent::GameOver], 100, true).unwrap();
        assert_eq!(trace.seq(), 3);

        let text = String::from_utf8(trace.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"seq":1,"event":"lock","score":100,"game_over":false}"#,
                r#"{"seq":2,"event":"clear","score":100,"game_over":false}"#,
                r#"{"seq":3,"event":"game_over","score":100,"game_over":true}"#,
            ]
        );
    }
}
