//! Shape generation for 2D primitives
//!
//! Everything here is a pure function of entity state; nothing is cached
//! between frames.

use glam::Vec2;

use super::Rect;

/// Top and bottom blocking rectangles of a pipe
///
/// `gap_top` is the y of the gap's upper edge. The top rectangle spans from
/// the viewport top to `gap_top`; the bottom one from `gap_top + gap` to the
/// viewport bottom.
pub fn pipe_rects(x: f32, gap_top: f32, width: f32, gap: f32, screen_height: i32) -> [Rect; 2] {
    let x = x as i32;
    let y = gap_top as i32;
    let w = width as i32;
    let gap = gap as i32;
    [
        Rect::new(x, 0, w, y),
        Rect::new(x, y + gap, w, screen_height - y - gap),
    ]
}

/// Top-left corner of a sprite centred on `center`
pub fn sprite_corner(center: Vec2, radius: f32) -> (i32, i32) {
    let corner = center - Vec2::splat(radius);
    (corner.x as i32, corner.y as i32)
}
