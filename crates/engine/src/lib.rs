//! Engine module - drives a [`GameSession`](tui_flappy_core::GameSession) frame by frame.
//!
//! The core never schedules itself. A host loop owns a [`Driver`] and calls
//! [`Driver::on_frame`] once per display frame; [`FramePacer`] decides when a
//! frame is due. Input is applied synchronously through [`Driver::handle`].

pub mod driver;
pub mod pacer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use driver::{Control, Driver, FrameOutcome};
pub use pacer::FramePacer;
