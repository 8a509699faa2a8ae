//! Per-frame driver.

use rand::Rng;
use tracing::debug;

use crate::core::{GameRng, GameSession, TickOutcome};
use crate::types::{InputEvent, Playfield};

/// What happened on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// One simulation step ran.
    Ticked(TickOutcome),
    /// The game is over; no step was scheduled.
    Halted,
}

/// What the host loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the session and is the only caller of its tick.
#[derive(Debug)]
pub struct Driver<R = GameRng> {
    session: GameSession<R>,
    /// Frames on which a step ran, across restarts.
    frames_ticked: u64,
}

impl<R: Rng> Driver<R> {
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            frames_ticked: 0,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn frames_ticked(&self) -> u64 {
        self.frames_ticked
    }

    /// Whether the next frame would run a step.
    pub fn is_active(&self) -> bool {
        !self.session.is_over()
    }

    /// Run exactly one step, unless the game is over.
    pub fn on_frame(&mut self) -> FrameOutcome {
        if self.session.is_over() {
            return FrameOutcome::Halted;
        }
        self.frames_ticked += 1;
        FrameOutcome::Ticked(self.session.tick())
    }

    /// Apply an input event to the session immediately.
    pub fn handle(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Activate => {
                self.session.activate();
                Control::Continue
            }
            InputEvent::Resize { width, height } => {
                // Rejected sizes keep the old playfield; the session logs why.
                if self
                    .session
                    .resize(Playfield::from_cells(width, height))
                    .is_ok()
                {
                    debug!(width, height, "terminal resized");
                }
                Control::Continue
            }
            InputEvent::Quit => Control::Quit,
        }
    }
}
