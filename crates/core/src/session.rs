//! Game session - owns the complete game state
//!
//! This module ties together the bird, the pipe set, scoring and the
//! running/over state machine. It exposes a single [`GameSession::tick`]
//! entry point; scheduling ticks is the caller's job.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::bird::Bird;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::pipe::PipeSet;
use crate::rng::GameRng;
use crate::snapshot::{GameSnapshot, PipeSnapshot};
use crate::types::{Phase, Playfield};

/// Why a tick ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Ground,
    Pipe,
}

impl GameOverCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverCause::Ground => "ground",
            GameOverCause::Pipe => "pipe",
        }
    }
}

/// Result of one call to [`GameSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick ran and the game is still running.
    Running,
    /// The tick ran and ended the game.
    GameOver(GameOverCause),
    /// The game was already over; nothing changed.
    Halted,
}

#[derive(Debug, Clone)]
pub struct GameSession<R = GameRng> {
    config: GameConfig,
    playfield: Playfield,
    bird: Bird,
    pipes: PipeSet,
    score: u32,
    phase: Phase,
    /// Ticks advanced since the last (re)start.
    ticks: u64,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Create a running session.
    ///
    /// Fails fast when the configuration or the playfield is unusable.
    pub fn new(config: GameConfig, playfield: Playfield, rng: R) -> Result<Self, ConfigError> {
        config.validate(playfield)?;
        Ok(Self {
            bird: Bird::new(&config, playfield.height),
            config,
            playfield,
            pipes: PipeSet::new(),
            score: 0,
            phase: Phase::Running,
            ticks: 0,
            rng,
        })
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeSet {
        &self.pipes
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    #[cfg(test)]
    pub(crate) fn pipes_mut(&mut self) -> &mut PipeSet {
        &mut self.pipes
    }

    /// Advance the simulation by one tick.
    ///
    /// Order: bird update, spawn roll, pipe scroll, collision checks, sweep.
    /// A tick that starts while running completes every phase even if the
    /// game ends midway. While over this is a no-op.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase.is_over() {
            return TickOutcome::Halted;
        }
        self.ticks += 1;

        let mut cause = None;

        if self.bird.update(self.playfield.height) {
            cause = Some(GameOverCause::Ground);
        }

        self.pipes
            .maybe_spawn(&mut self.rng, self.playfield, &self.config);
        self.pipes.advance(self.config.game_speed);

        if self
            .pipes
            .any_collision(self.bird.bounds(), self.playfield.height)
        {
            cause = cause.or(Some(GameOverCause::Pipe));
        }

        let passed = self.pipes.sweep();
        self.score += passed;

        match cause {
            Some(cause) => {
                self.phase = Phase::Over;
                info!(
                    cause = cause.as_str(),
                    score = self.score,
                    ticks = self.ticks,
                    "game over"
                );
                TickOutcome::GameOver(cause)
            }
            None => TickOutcome::Running,
        }
    }

    /// Set the bird velocity to the lift constant.
    pub fn flap(&mut self) {
        self.bird.flap();
    }

    /// Flap while running, restart when over.
    pub fn activate(&mut self) {
        if self.phase.is_over() {
            self.restart();
        } else {
            self.flap();
        }
    }

    /// Back to a fresh running game on the current playfield.
    pub fn restart(&mut self) {
        self.score = 0;
        self.pipes.clear();
        self.bird.reset(self.playfield.height);
        self.phase = Phase::Running;
        self.ticks = 0;
        info!("game restarted");
    }

    /// Change the playfield bounds and re-center the bird.
    ///
    /// Score, pipes and phase are kept. A playfield too small for the gap is
    /// rejected and the previous bounds stay in effect.
    pub fn resize(&mut self, playfield: Playfield) -> Result<(), ConfigError> {
        if let Err(err) = self.config.validate_playfield(playfield) {
            warn!(
                width = playfield.width,
                height = playfield.height,
                %err,
                "resize rejected"
            );
            return Err(err);
        }
        debug!(
            width = playfield.width,
            height = playfield.height,
            "playfield resized"
        );
        self.playfield = playfield;
        self.bird.recenter(playfield.height);
        Ok(())
    }

    /// Write a render snapshot into `out`, reusing its pipe buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let height = self.playfield.height;
        out.playfield = self.playfield;
        out.bird = self.bird.bounds();
        out.pipes.clear();
        out.pipes.extend(self.pipes.iter().map(|p| PipeSnapshot {
            top: p.top_rect(),
            bottom: p.bottom_rect(height),
        }));
        out.score = self.score;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::Pipe;
    use rand::rngs::mock::StepRng;

    const FIELD: Playfield = Playfield::new(800.0, 600.0);

    /// Never rolls a spawn.
    fn quiet() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn session() -> GameSession<StepRng> {
        GameSession::new(GameConfig::default(), FIELD, quiet()).unwrap()
    }

    fn pipe(x: f32, gap_top: f32) -> Pipe {
        let mut p = Pipe::with_gap_top(FIELD, &GameConfig::default(), gap_top);
        p.x = x;
        p
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.score(), 0);
        assert!(s.pipes().is_empty());
        assert_eq!(s.bird().y, 300.0);
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn test_new_rejects_small_playfield() {
        let err = GameSession::new(GameConfig::default(), Playfield::new(800.0, 250.0), quiet())
            .unwrap_err();
        assert!(matches!(err, ConfigError::PlayfieldTooSmall { .. }));
    }

    #[test]
    fn test_tick_from_rest() {
        let mut s = session();
        s.bird_mut().y = 0.0;
        assert_eq!(s.tick(), TickOutcome::Running);
        assert_eq!(s.bird().velocity, 0.5);
        assert_eq!(s.bird().y, 0.5);
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_pipe_scrolls_and_stays() {
        let mut s = session();
        s.pipes_mut().push(pipe(200.0, 250.0));
        s.tick();
        assert_eq!(s.pipes().as_slice()[0].x, 198.0);
    }

    #[test]
    fn test_off_screen_pipe_scores_once() {
        let mut s = session();
        s.pipes_mut().push(pipe(-49.0, 250.0));
        s.pipes_mut().push(pipe(400.0, 250.0));
        assert_eq!(s.tick(), TickOutcome::Running);
        assert_eq!(s.score(), 1);
        assert_eq!(s.pipes().len(), 1);
        assert_eq!(s.pipes().as_slice()[0].x, 398.0);

        s.tick();
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_adjacent_off_screen_pipes_both_score() {
        let mut s = session();
        s.pipes_mut().push(pipe(-49.0, 250.0));
        s.pipes_mut().push(pipe(-49.5, 250.0));
        s.tick();
        assert_eq!(s.score(), 2);
        assert!(s.pipes().is_empty());
    }

    #[test]
    fn test_bird_in_gap_keeps_running() {
        let mut s = session();
        // Gap 250..450, bird spans 300.5..340.5 after one tick.
        s.pipes_mut().push(pipe(62.0, 250.0));
        assert_eq!(s.tick(), TickOutcome::Running);
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let mut s = session();
        s.pipes_mut().push(pipe(62.0, 350.0));
        assert_eq!(s.tick(), TickOutcome::GameOver(GameOverCause::Pipe));
        assert!(s.is_over());
    }

    #[test]
    fn test_bird_above_field_hits_top_segment() {
        let mut s = session();
        s.bird_mut().y = -30.0;
        s.bird_mut().velocity = -5.0;
        // No ceiling: above the field is fine until a pipe overlaps.
        assert_eq!(s.tick(), TickOutcome::Running);
        assert!(s.bird().y < 0.0);

        s.pipes_mut().push(pipe(62.0, 250.0));
        assert_eq!(s.tick(), TickOutcome::GameOver(GameOverCause::Pipe));
    }

    #[test]
    fn test_ground_ends_game() {
        let mut s = session();
        s.bird_mut().y = 559.0;
        s.bird_mut().velocity = 5.0;
        assert_eq!(s.tick(), TickOutcome::GameOver(GameOverCause::Ground));
        assert_eq!(s.bird().y, 560.0);
        assert_eq!(s.bird().velocity, 0.0);
    }

    #[test]
    fn test_over_is_frozen() {
        let mut s = session();
        s.pipes_mut().push(pipe(300.0, 250.0));
        s.bird_mut().y = 559.0;
        s.bird_mut().velocity = 1.0;
        s.tick();
        assert!(s.is_over());

        let before = (s.bird().y, s.pipes().clone(), s.score(), s.ticks());
        for _ in 0..100 {
            assert_eq!(s.tick(), TickOutcome::Halted);
        }
        assert_eq!(before, (s.bird().y, s.pipes().clone(), s.score(), s.ticks()));
    }

    #[test]
    fn test_activate_flaps_then_restarts() {
        let mut s = session();
        s.activate();
        assert_eq!(s.bird().velocity, -12.0);

        s.pipes_mut().push(pipe(-49.0, 250.0));
        s.bird_mut().y = 559.0;
        s.bird_mut().velocity = 1.0;
        s.tick();
        assert!(s.is_over());
        assert_eq!(s.score(), 1);

        s.activate();
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.score(), 0);
        assert!(s.pipes().is_empty());
        assert_eq!(s.bird().y, 300.0);
        assert_eq!(s.bird().velocity, 0.0);
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn test_resize_recenters_and_keeps_progress() {
        let mut s = session();
        s.pipes_mut().push(pipe(400.0, 250.0));
        s.tick();
        s.bird_mut().velocity = 3.0;
        let score = s.score();

        s.resize(Playfield::new(1000.0, 800.0)).unwrap();
        assert_eq!(s.playfield(), Playfield::new(1000.0, 800.0));
        assert_eq!(s.bird().y, 400.0);
        assert_eq!(s.bird().velocity, 3.0);
        assert_eq!(s.pipes().len(), 1);
        assert_eq!(s.score(), score);
    }

    #[test]
    fn test_resize_rejects_small_playfield() {
        let mut s = session();
        assert!(s.resize(Playfield::new(800.0, 100.0)).is_err());
        assert_eq!(s.playfield(), FIELD);
    }

    #[test]
    fn test_spawn_on_every_roll() {
        let cfg = GameConfig::default();
        let mut s = GameSession::new(cfg, FIELD, StepRng::new(0, 0)).unwrap();
        s.tick();
        assert_eq!(s.pipes().len(), 1);
        let p = s.pipes().as_slice()[0];
        assert_eq!(p.x, 798.0);
        assert_eq!(p.gap_top, 0.0);
    }

    #[test]
    fn test_clamp_invariant_holds_with_random_flaps() {
        let mut s = GameSession::new(GameConfig::default(), FIELD, crate::rng::seeded(42)).unwrap();
        let mut flips = crate::rng::seeded(7);
        for _ in 0..5_000 {
            if crate::rng::chance(&mut flips, 0.05) {
                s.activate();
            }
            s.tick();
            let b = s.bird().bounds();
            assert!(b.bottom() <= s.playfield().height);
        }
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut s = session();
        s.pipes_mut().push(pipe(400.0, 120.0));
        let snap = s.snapshot();
        assert_eq!(snap.playfield, FIELD);
        assert_eq!(snap.bird, s.bird().bounds());
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].top.height, 120.0);
        assert_eq!(snap.pipes[0].bottom.y, 320.0);
        assert!(!snap.game_over());
    }
}
