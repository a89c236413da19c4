//! JSON-lines session journal.
//!
//! Every record is one JSON object per line carrying `type`, `seq` and `ts`
//! (milliseconds since the Unix epoch) plus the event's own fields.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        seed: u32,
    },
    Lock {
        kind: String,
        rows_cleared: u32,
        score_gained: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    LevelUp {
        level: u32,
        drop_interval_ms: u32,
    },
    GameOver {
        score: u32,
        level: u32,
        lines: u32,
    },
    Restart {
        episode: u32,
    },
}

impl JournalRecord {
    /// Records describing one lock, in the order they happened.
    pub fn for_lock(event: &LockEvent, game: &GameState) -> Vec<JournalRecord> {
        let mut records = vec![JournalRecord::Lock {
            kind: event.kind.as_str().to_string(),
            rows_cleared: event.lines_cleared,
            score_gained: event.score_gained,
            score: game.score(),
            level: event.level,
            lines: game.lines(),
        }];
        if event.leveled_up {
            records.push(JournalRecord::LevelUp {
                level: event.level,
                drop_interval_ms: game.drop_interval_ms(),
            });
        }
        if event.game_over {
            records.push(JournalRecord::GameOver {
                score: game.score(),
                level: game.level(),
                lines: game.lines(),
            });
        }
        records
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    record: &'a JournalRecord,
}

/// Appends records to a writer until the first failure.
///
/// A failed write disables the journal; the error is kept for the caller to
/// report once the terminal is back to normal.
pub struct Journal<W: Write = File> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
    failure: Option<String>,
}

impl Journal<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(256),
            failure: None,
        }
    }

    /// A journal that drops everything.
    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &JournalRecord) {
        if let Err(err) = self.try_record(record) {
            self.out = None;
            self.failure = Some(format!("{err:#}"));
        }
    }

    fn try_record(&mut self, record: &JournalRecord) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        self.seq += 1;
        let envelope = Envelope {
            seq: self.seq,
            ts: now_ms(),
            record,
        };

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &envelope).context("failed to encode journal record")?;
        self.buf.push(b'\n');
        write_line(out, &self.buf).context("failed to write journal record")
    }

    /// Why the journal stopped, if it did.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn write_line<W: Write>(out: &mut W, line: &[u8]) -> io::Result<()> {
    out.write_all(line)?;
    out.flush()
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_tagged_lines() {
        let mut journal = Journal::new(Vec::new());
        journal.record(&JournalRecord::Start { seed: 9 });
        journal.record(&JournalRecord::Restart { episode: 1 });

        let bytes = journal.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "start");
        assert_eq!(first["seed"], 9);
        assert_eq!(first["seq"], 1);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "restart");
        assert_eq!(second["seq"], 2);
    }

    #[test]
    fn write_failure_disables_journal() {
        let mut journal = Journal::new(Broken);
        journal.record(&JournalRecord::Start { seed: 1 });
        assert!(!journal.is_enabled());
        assert!(journal.failure().unwrap().contains("disk full"));

        journal.record(&JournalRecord::Restart { episode: 1 });
        assert!(journal.failure().is_some());
    }

    #[test]
    fn disabled_journal_is_silent() {
        let mut journal: Journal<Vec<u8>> = Journal::disabled();
        journal.record(&JournalRecord::Start { seed: 1 });
        assert!(journal.failure().is_none());
        assert!(journal.into_inner().is_none());
    }
}
