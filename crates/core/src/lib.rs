//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, input devices, or clocks, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: The random source is injected, so tests can fix every draw
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`bird`]: the player entity, its gravity update and flap
//! - [`pipe`]: pipes, gap placement, collision, and the ordered pipe set
//! - [`session`]: complete game state, the per-tick step and restart
//! - [`config`]: tunable constants, TOML loading and startup validation
//! - [`rng`]: seeded / entropy random sources for pipe spawning
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Gravity**: the bird accelerates down by a fixed amount every tick
//! - **Flap**: sets the velocity to a fixed upward value (not additive)
//! - **Spawning**: each tick spawns a pipe with a fixed probability
//! - **Scoring**: one point per pipe that scrolls fully off the left edge
//! - **Game over**: touching the ground or a pipe segment; ticks halt until restart
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::{rng, GameConfig, GameSession, TickOutcome};
//! use tui_flappy_core::types::Playfield;
//!
//! let mut game = GameSession::new(
//!     GameConfig::default(),
//!     Playfield::new(800.0, 600.0),
//!     rng::seeded(12345),
//! )
//! .unwrap();
//!
//! game.flap();
//! assert_eq!(game.tick(), TickOutcome::Running);
//! assert!(game.bird().velocity < 0.0);
//! ```

pub mod bird;
pub mod config;
pub mod error;
pub mod pipe;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_flappy_types as types;

pub use bird::{Bird, Rect};
pub use config::GameConfig;
pub use error::ConfigError;
pub use pipe::{Pipe, PipeSet};
pub use rng::GameRng;
pub use session::{GameOverCause, GameSession, TickOutcome};
pub use snapshot::{GameSnapshot, PipeSnapshot};
