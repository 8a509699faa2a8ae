use crate::bird::Rect;
use crate::types::{Phase, Playfield};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub top: Rect,
    pub bottom: Rect,
}

/// Read-only view of a session, handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub playfield: Playfield,
    pub bird: Rect,
    pub pipes: Vec<PipeSnapshot>,
    pub score: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase.is_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(0.0, 0.0),
            bird: Rect::new(0.0, 0.0, 0.0, 0.0),
            pipes: Vec::new(),
            score: 0,
            phase: Phase::Running,
        }
    }
}
