//! Game configuration.
//!
//! Defaults reproduce the classic browser tuning. Any subset of fields can be
//! overridden from a TOML file; missing fields keep their defaults.
//!
//! ```
//! use tui_flappy_core::GameConfig;
//!
//! let cfg = GameConfig::from_toml_str("gravity = 0.25\nspawn_chance = 0.05").unwrap();
//! assert_eq!(cfg.gravity, 0.25);
//! assert_eq!(cfg.spawn_chance, 0.05);
//! assert_eq!(cfg.lift, GameConfig::default().lift);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::*;

/// Tunable physics and spawn constants for one session.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub gravity: f32,
    pub lift: f32,
    pub game_speed: f32,
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    pub gap_size: f32,
    pub gap_margin: f32,
    pub spawn_chance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            lift: LIFT,
            game_speed: GAME_SPEED,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document and validate the values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate_values()?;
        Ok(cfg)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Smallest playfield height that still fits a gap above the margin.
    pub fn min_playfield_height(&self) -> f32 {
        self.gap_size + self.gap_margin
    }

    /// Check every constant and that `playfield` can host this configuration.
    pub fn validate(&self, playfield: Playfield) -> Result<(), ConfigError> {
        self.validate_values()?;
        self.validate_playfield(playfield)
    }

    /// Check only the playfield against this configuration.
    pub fn validate_playfield(&self, playfield: Playfield) -> Result<(), ConfigError> {
        let min = self.min_playfield_height();
        if !playfield.height.is_finite() || playfield.height < min {
            return Err(ConfigError::PlayfieldTooSmall {
                height: playfield.height,
                min,
            });
        }
        if !playfield.width.is_finite() || playfield.width <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "playfield.width",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    fn validate_values(&self) -> Result<(), ConfigError> {
        let positive = [
            ("game_speed", self.game_speed),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("gap_size", self.gap_size),
        ];
        for (field, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("bird_x", self.bird_x),
            ("gap_margin", self.gap_margin),
        ];
        for (field, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be zero or a positive number",
                });
            }
        }

        if !self.lift.is_finite() || self.lift >= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "lift",
                reason: "must be negative (upwards)",
            });
        }

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::InvalidValue {
                field: "spawn_chance",
                reason: "must be within [0, 1]",
            });
        }

        Ok(())
    }
}
