//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::InputEvent`]. There is no key
//! repeat handling: one press is one event.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};
