//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Playfield Units
//!
//! The simulation works in abstract playfield units (the scale of a browser
//! canvas in pixels). The terminal frontend maps one character cell to
//! [`UNITS_PER_COL`] x [`UNITS_PER_ROW`] units.
//!
//! # Physics Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.5 | Added to the bird velocity every tick |
//! | `LIFT` | -12.0 | Velocity set by a flap (override, not impulse) |
//! | `GAME_SPEED` | 2.0 | Units each pipe scrolls left per tick |
//! | `SPAWN_CHANCE` | 0.02 | Per-tick probability of spawning a pipe |
//! | `GAP_SIZE` | 200.0 | Vertical opening in every pipe |
//! | `GAP_MARGIN` | 100.0 | Minimum clearance of the gap from the bottom edge |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Phase, Playfield, UNITS_PER_COL, UNITS_PER_ROW};
//!
//! let field = Playfield::from_cells(80, 24);
//! assert_eq!(field.width, 80.0 * UNITS_PER_COL);
//! assert_eq!(field.height, 24.0 * UNITS_PER_ROW);
//!
//! assert!(!Phase::default().is_over());
//! ```

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Velocity added every tick
pub const GRAVITY: f32 = 0.5;

/// Velocity assigned by a flap (negative is up)
pub const LIFT: f32 = -12.0;

/// Horizontal scroll speed of pipes in units per tick
pub const GAME_SPEED: f32 = 2.0;

/// Fixed horizontal position of the bird
pub const BIRD_X: f32 = 50.0;

/// Bird bounding box width
pub const BIRD_WIDTH: f32 = 40.0;

/// Bird bounding box height
pub const BIRD_HEIGHT: f32 = 40.0;

/// Pipe width
pub const PIPE_WIDTH: f32 = 50.0;

/// Vertical opening between the two pipe segments
pub const GAP_SIZE: f32 = 200.0;

/// Minimum clearance between the gap and the bottom edge
pub const GAP_MARGIN: f32 = 100.0;

/// Per-tick pipe spawn probability (expected interval ≈ 50 ticks)
pub const SPAWN_CHANCE: f32 = 0.02;

/// Playfield units covered by one terminal column
pub const UNITS_PER_COL: f32 = 10.0;

/// Playfield units covered by one terminal row
pub const UNITS_PER_ROW: f32 = 20.0;

/// Rectangular bounds of the simulation, in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Playfield covering a terminal of `cols` x `rows` cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as f32 * UNITS_PER_COL,
            height: rows as f32 * UNITS_PER_ROW,
        }
    }
}

/// Session state machine.
///
/// `Running` is the initial state; `Over` is terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Over,
}

impl Phase {
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Over)
    }
}

/// Discrete events delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap while running, restart once the game is over
    Activate,
    /// Terminal resized to `width` x `height` cells
    Resize { width: u16, height: u16 },
    /// Leave the game
    Quit,
}
