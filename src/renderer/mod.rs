//! Rendering surface
//!
//! The simulation issues draw calls through [`Renderer`]; hosts decide what
//! a draw call means. Sprites are loaded once through [`SpriteLoader`].

pub mod ascii;
pub mod recorder;
pub mod shapes;
pub mod sprite;

pub use ascii::AsciiRenderer;
pub use recorder::{DrawCommand, FrameRecorder};
pub use sprite::FileSpriteLoader;

use crate::error::AssetError;

/// RGBA draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Integer screen rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True if the point lies inside (right/bottom edges exclusive)
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// A loaded sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteHandle {
    pub asset: String,
    pub width: u32,
    pub height: u32,
}

/// Draw-call sink. Best effort: no call reports failure.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_sprite(&mut self, sprite: &SpriteHandle, x: i32, y: i32);
    fn present(&mut self);
}

/// Loads sprites by asset name
pub trait SpriteLoader {
    fn load(&mut self, asset: &str) -> Result<SpriteHandle, AssetError>;
}
