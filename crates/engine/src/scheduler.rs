//! Frame scheduling over an injected clock.

use crate::clock::Clock;
use crate::controller::{GameLoop, LoopControl};

/// Converts clock readings into frame deltas for [`GameLoop::on_tick`].
#[derive(Debug)]
pub struct Scheduler<C> {
    clock: C,
    last_ms: Option<u64>,
    stopped: bool,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_ms: None,
            stopped: false,
        }
    }

    /// Run one frame: measure the time since the previous frame and tick.
    ///
    /// The first frame after construction or [`resume`](Self::resume) has a
    /// delta of zero.
    pub fn frame(&mut self, game: &mut GameLoop) -> LoopControl {
        let now = self.clock.now_ms();
        let delta = match self.last_ms {
            Some(last) => now.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now);

        let control = game.on_tick(delta.min(u32::MAX as u64) as u32);
        self.stopped = control == LoopControl::Stop;
        control
    }

    /// Forget the previous frame time, e.g. after a restart
    pub fn resume(&mut self) {
        self.last_ms = None;
        self.stopped = false;
    }

    /// Whether the last frame asked to stop scheduling
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// What the host saw while polling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Continue,
    /// A restart was applied; frame timing starts over.
    Restarted,
    Quit,
}

/// The shell around the loop: input, drawing and frame pacing.
pub trait FrameHost {
    type Error;

    /// Wait for the next frame while applying queued input to `game`.
    fn poll_input(&mut self, game: &mut GameLoop) -> Result<HostSignal, Self::Error>;

    /// Draw the current state.
    fn render(&mut self, game: &mut GameLoop) -> Result<(), Self::Error>;
}

/// Drive `game` until the host quits.
///
/// Gravity frames stop once the game is over; input polling and rendering
/// continue so the host can still restart or quit.
pub fn run<C, H>(game: &mut GameLoop, scheduler: &mut Scheduler<C>, host: &mut H) -> Result<(), H::Error>
where
    C: Clock,
    H: FrameHost,
{
    loop {
        match host.poll_input(game)? {
            HostSignal::Quit => return Ok(()),
            HostSignal::Restarted => scheduler.resume(),
            HostSignal::Continue => {}
        }

        if !scheduler.is_stopped() {
            scheduler.frame(game);
        }

        host.render(game)?;
    }
}
