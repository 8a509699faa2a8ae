//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Rect};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Playfield;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SKY: Rgb = Rgb::new(112, 197, 206);
const PIPE: Rgb = Rgb::new(84, 168, 55);
const BIRD: Rgb = Rgb::new(245, 200, 66);
const INK: Rgb = Rgb::new(0, 0, 0);
const ALERT: Rgb = Rgb::new(220, 40, 40);

/// Draws the playfield stretched over the whole viewport.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    restart_hint: &'static str,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            restart_hint: "space / click to restart",
        }
    }
}

impl GameView {
    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let sky = CellStyle::new(INK, SKY);
        fb.clear(sky.into_cell(' '));

        let scale = Scale::new(snap.playfield, viewport);

        let pipe = CellStyle::new(PIPE, SKY);
        for p in &snap.pipes {
            scale.fill(fb, p.top, '█', pipe);
            scale.fill(fb, p.bottom, '█', pipe);
        }

        scale.fill(fb, snap.bird, '█', CellStyle::new(BIRD, SKY));

        let score = CellStyle::new(INK, SKY).bold();
        fb.put_str(1, 0, "Score: ", score);
        fb.put_u32(8, 0, snap.score, score);

        if snap.game_over() {
            self.draw_game_over(fb, snap.score, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, score: u32, viewport: Viewport) {
        let title = CellStyle::new(ALERT, SKY).bold();
        let body = CellStyle::new(ALERT, SKY);
        let mid = viewport.height / 2;

        let title_text = "Game Over!";
        fb.put_str(centered(viewport.width, 10), mid.saturating_sub(1), title_text, title);

        // "Score: " plus the digits.
        let line_w = 7 + digit_count(score);
        let x = centered(viewport.width, line_w);
        fb.put_str(x, mid, "Score: ", body);
        fb.put_u32(x + 7, mid, score, body);

        let hint_w = self.restart_hint.chars().count() as u16;
        fb.put_str(
            centered(viewport.width, hint_w),
            mid.saturating_add(2),
            self.restart_hint,
            CellStyle::new(INK, SKY),
        );
    }
}

/// Playfield units to cell coordinates.
struct Scale {
    sx: f32,
    sy: f32,
}

impl Scale {
    fn new(field: Playfield, viewport: Viewport) -> Self {
        let sx = if field.width > 0.0 {
            viewport.width as f32 / field.width
        } else {
            0.0
        };
        let sy = if field.height > 0.0 {
            viewport.height as f32 / field.height
        } else {
            0.0
        };
        Self { sx, sy }
    }

    /// Fill the cells covered by `rect`. Non-empty rects cover at least one cell.
    fn fill(&self, fb: &mut FrameBuffer, rect: Rect, ch: char, style: CellStyle) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let x0 = (rect.x * self.sx).round() as i32;
        let y0 = (rect.y * self.sy).round() as i32;
        let x1 = ((rect.right() * self.sx).round() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() * self.sy).round() as i32).max(y0 + 1);
        fb.fill_span(x0, y0, x1, y1, ch, style);
    }
}

fn centered(total: u16, width: u16) -> u16 {
    total.saturating_sub(width) / 2
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
