//! Collision tests between the bird, the viewport and pipes
//!
//! All checks are strict: shapes that merely touch do not collide.

use glam::Vec2;

use super::entity::{Body, Shape};

/// Viewport edge the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Check a circle's vertical extent against the viewport
///
/// Returns the wall crossed and the centre y that puts the circle back
/// against it.
pub fn viewport_clamp(y: f32, radius: f32, height: f32) -> Option<(Wall, f32)> {
    if y - radius < 0.0 {
        Some((Wall::Top, radius))
    } else if y + radius > height {
        Some((Wall::Bottom, height - radius))
    } else {
        None
    }
}

/// Does `[center - radius, center + radius]` overlap `[start, start + width]`?
#[inline]
pub fn overlaps_span(center: f32, radius: f32, start: f32, width: f32) -> bool {
    center + radius > start && center - radius < start + width
}

/// Is `[center - radius, center + radius]` inside the gap `[top, top + gap]`?
#[inline]
pub fn inside_gap(center: f32, radius: f32, top: f32, gap: f32) -> bool {
    center - radius >= top && center + radius <= top + gap
}

/// Does a circle at `center` hit the blocked part of `pipe`?
///
/// The blocked region is recomputed from the pipe's current position; a
/// non-obstacle body never collides.
pub fn circle_hits_pipe(center: Vec2, radius: f32, pipe: &Body) -> bool {
    let Shape::Gap { width, gap } = pipe.shape else {
        return false;
    };
    overlaps_span(center.x, radius, pipe.pos.x, width)
        && !inside_gap(center.y, radius, pipe.pos.y, gap)
}
