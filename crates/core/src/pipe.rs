//! Pipes and the ordered set of active pipes.
//!
//! A pipe is two solid segments with a gap between them: the top segment
//! spans `[0, gap_top)` and the bottom one spans
//! `[field_height - gap_bottom, field_height)`. For every pipe
//! `gap_top + gap_size + gap_bottom == field_height` at creation.

use rand::Rng;
use tracing::debug;

use crate::bird::Rect;
use crate::config::GameConfig;
use crate::rng;
use crate::types::Playfield;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

impl Pipe {
    /// Build a pipe at the right edge of the field with a random gap position.
    ///
    /// `gap_top` is uniform in `[0, height - gap_size - gap_margin)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, field: Playfield, config: &GameConfig) -> Self {
        let range = (field.height - config.gap_size - config.gap_margin).max(0.0);
        let gap_top = rng::unit(rng) * range;
        Self::with_gap_top(field, config, gap_top)
    }

    /// Build a pipe at the right edge of the field with a fixed gap position.
    pub fn with_gap_top(field: Playfield, config: &GameConfig, gap_top: f32) -> Self {
        Self {
            x: field.width,
            width: config.pipe_width,
            gap_top,
            gap_bottom: field.height - (gap_top + config.gap_size),
        }
    }

    /// Scroll left by `speed` units.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// The trailing edge has passed the left boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Whether `bounds` overlaps either solid segment.
    pub fn collides_with(&self, bounds: Rect, field_height: f32) -> bool {
        let horizontal = bounds.right() > self.x && bounds.x < self.x + self.width;
        if !horizontal {
            return false;
        }
        bounds.y < self.gap_top || bounds.bottom() > field_height - self.gap_bottom
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    pub fn bottom_rect(&self, field_height: f32) -> Rect {
        Rect::new(
            self.x,
            field_height - self.gap_bottom,
            self.width,
            self.gap_bottom,
        )
    }
}

/// Active pipes in spawn order (which is also left-to-right screen order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeSet {
    pipes: Vec<Pipe>,
}

impl PipeSet {
    pub fn new() -> Self {
        Self { pipes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pipe> {
        self.pipes.iter()
    }

    pub fn as_slice(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    /// Bernoulli spawn roll for this tick. Returns the new pipe, if any.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        field: Playfield,
        config: &GameConfig,
    ) -> Option<Pipe> {
        if !rng::chance(rng, config.spawn_chance) {
            return None;
        }
        let pipe = Pipe::spawn(rng, field, config);
        debug!(
            x = pipe.x,
            gap_top = pipe.gap_top,
            gap_bottom = pipe.gap_bottom,
            "pipe spawned"
        );
        self.pipes.push(pipe);
        Some(pipe)
    }

    pub fn advance(&mut self, speed: f32) {
        for pipe in &mut self.pipes {
            pipe.advance(speed);
        }
    }

    /// Whether any pipe overlaps `bounds`.
    pub fn any_collision(&self, bounds: Rect, field_height: f32) -> bool {
        self.pipes
            .iter()
            .any(|p| p.collides_with(bounds, field_height))
    }

    /// Drop every pipe that has left the field, keeping the order of the rest.
    ///
    /// Returns how many were removed.
    pub fn sweep(&mut self) -> u32 {
        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_off_screen());
        let removed = (before - self.pipes.len()) as u32;
        if removed > 0 {
            debug!(removed, remaining = self.pipes.len(), "pipes swept");
        }
        removed
    }
}

impl<'a> IntoIterator for &'a PipeSet {
    type Item = &'a Pipe;
    type IntoIter = std::slice::Iter<'a, Pipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.pipes.iter()
    }
}
