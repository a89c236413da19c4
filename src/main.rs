//! Blockfall terminal runner.
//!
//! Crossterm provides input; drawing goes through the framebuffer renderer.
//! Environment settings are documented in `blockfall::config`.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::config::Config;
use blockfall::core::GameSnapshot;
use blockfall::engine::{run, FrameHost, GameLoop, HostSignal, Scheduler, SystemClock};
use blockfall::input::{action_for_event, should_quit};
use blockfall::journal::{Journal, JournalRecord};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env();
    let seed = config.resolve_seed();

    let mut journal = match &config.log_path {
        Some(path) => Journal::open(path).unwrap_or_else(|err| {
            eprintln!("blockfall: {err:#}");
            Journal::disabled()
        }),
        None => Journal::disabled(),
    };
    journal.record(&JournalRecord::Start { seed });

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let mut host = TerminalHost::new(renderer, journal, config.frame_ms);
    let mut game = GameLoop::new(seed);
    let mut scheduler = Scheduler::new(SystemClock::new());
    let result = run(&mut game, &mut scheduler, &mut host);

    // Always try to restore terminal state.
    let restored = host.renderer.exit();

    if let Some(err) = host.journal.failure() {
        eprintln!("blockfall: journal disabled: {err}");
    }
    settle(result, restored)
}

/// A failed restore is reported unless the game loop already failed.
fn settle(result: Result<()>, restored: Result<()>) -> Result<()> {
    result?;
    restored.context("failed to restore terminal")
}

struct TerminalHost {
    renderer: TerminalRenderer<io::Stdout>,
    journal: Journal,
    view: GameView,
    fb: FrameBuffer,
    snapshot: GameSnapshot,
    frame: Duration,
    next_frame: Instant,
}

impl TerminalHost {
    fn new(renderer: TerminalRenderer<io::Stdout>, journal: Journal, frame_ms: u64) -> Self {
        let frame = Duration::from_millis(frame_ms);
        Self {
            renderer,
            journal,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            snapshot: GameSnapshot::default(),
            frame,
            next_frame: Instant::now() + frame,
        }
    }

    fn journal_lock(&mut self, game: &mut GameLoop) {
        if let Some(event) = game.take_last_event() {
            for record in JournalRecord::for_lock(&event, game.game()) {
                self.journal.record(&record);
            }
        }
    }
}

impl FrameHost for TerminalHost {
    type Error = anyhow::Error;

    fn poll_input(&mut self, game: &mut GameLoop) -> Result<HostSignal> {
        let mut signal = HostSignal::Continue;

        loop {
            let timeout = self.next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(HostSignal::Quit);
                    }
                    let Some(action) = action_for_event(key) else {
                        continue;
                    };
                    game.apply(action);
                    if action == GameAction::Restart {
                        signal = HostSignal::Restarted;
                        self.journal.record(&JournalRecord::Restart {
                            episode: game.game().episode_id(),
                        });
                    } else {
                        self.journal_lock(game);
                    }
                }
                Event::Resize(_, _) => self.renderer.invalidate(),
                _ => {}
            }
        }

        self.next_frame += self.frame;
        // Don't try to catch up after a stall.
        let now = Instant::now();
        if self.next_frame < now {
            self.next_frame = now + self.frame;
        }
        Ok(signal)
    }

    fn render(&mut self, game: &mut GameLoop) -> Result<()> {
        self.journal_lock(game);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut self.snapshot);
        self.view
            .render_into(&self.snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn restore_failure_surfaces_after_clean_run() {
        let err = settle(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(format!("{err:#}"), "failed to restore terminal: tty gone");
    }

    #[test]
    fn loop_error_wins_over_restore_failure() {
        let err = settle(Err(anyhow!("read failed")), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }

    #[test]
    fn clean_run_and_restore_is_ok() {
        assert!(settle(Ok(()), Ok(())).is_ok());
    }
}
