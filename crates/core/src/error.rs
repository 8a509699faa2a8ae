//! Startup and configuration errors.
//!
//! The simulation step itself cannot fail; everything here is raised before
//! the first tick (or when a resize would break the playfield invariants).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or resizing a game session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The playfield cannot fit a gap plus its bottom margin.
    #[error("playfield height {height} is below the minimum {min} (gap + margin)")]
    PlayfieldTooSmall {
        /// Requested playfield height.
        height: f32,
        /// Smallest height that still fits a gap.
        min: f32,
    },

    /// A configuration value is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The configuration file is not valid TOML for [`crate::GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {message}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },
}
