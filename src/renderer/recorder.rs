//! Draw-call recorder

use super::{Color, Rect, Renderer, SpriteHandle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
    Sprite { asset: String, x: i32, y: i32 },
}

/// Renderer that remembers the draw calls of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Number of presented frames
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Filled rectangles of the last presented frame
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.presented.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect(rect, _) => Some(rect),
            _ => None,
        })
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::FillRect(rect, color));
    }

    fn draw_sprite(&mut self, sprite: &SpriteHandle, x: i32, y: i32) {
        self.pending.push(DrawCommand::Sprite {
            asset: sprite.asset.clone(),
            x,
            y,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
