//! The player-controlled bird.

use crate::config::GameConfig;

/// Axis-aligned bounding box in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Bird state: fixed x and size, mutable y and vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    gravity: f32,
    lift: f32,
}

impl Bird {
    /// Create a bird at rest, vertically centered in a field of `field_height`.
    pub fn new(config: &GameConfig, field_height: f32) -> Self {
        Self {
            x: config.bird_x,
            y: field_height / 2.0,
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
            gravity: config.gravity,
            lift: config.lift,
        }
    }

    /// Apply one tick of gravity and clamp to the ground.
    ///
    /// Returns `true` when the bird is resting on the ground after the update.
    pub fn update(&mut self, field_height: f32) -> bool {
        self.velocity += self.gravity;
        self.y += self.velocity;

        if self.y + self.height >= field_height {
            self.y = field_height - self.height;
            self.velocity = 0.0;
            return true;
        }
        false
    }

    /// Set velocity to the lift constant, discarding the current velocity.
    pub fn flap(&mut self) {
        self.velocity = self.lift;
    }

    /// Back to the starting position, at rest.
    pub fn reset(&mut self, field_height: f32) {
        self.y = field_height / 2.0;
        self.velocity = 0.0;
    }

    /// Re-center vertically after the field changed size. Velocity is kept.
    pub fn recenter(&mut self, field_height: f32) {
        self.y = field_height / 2.0;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
