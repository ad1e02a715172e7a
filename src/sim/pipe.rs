//! Pipes: obstacles scrolling right to left
//!
//! Each pipe moves linearly from its phase origin. Once it has scrolled off
//! the left edge it re-enters at the right edge with a fresh gap height.
//! Wrapping is per pipe and independent of the collision reset.

use std::ops::Range;

use glam::Vec2;

use super::component::{GraphicsComponent, NoInput, PhysicsComponent};
use super::context::SimContext;
use super::entity::{Body, Entity, Neighbors, Shape};
use crate::consts::*;
use crate::renderer::{Color, Renderer, shapes};

/// Range the gap's top edge is drawn from (end exclusive)
///
/// Keeps `PIPE_MARGIN` pixels between the gap and the viewport top, and at
/// least as much below the gap.
pub fn gap_band() -> Range<i32> {
    PIPE_MARGIN..SCREEN_HEIGHT - 2 * PIPE_MARGIN
}

/// Starting x origin of the `ordinal`-th pipe (0-based)
///
/// Pipes start off-screen to the right, a quarter viewport apart.
pub fn home_origin(ordinal: usize) -> f32 {
    (SCREEN_WIDTH + SCREEN_WIDTH / 4 * ordinal as i32) as f32
}

/// Linear scroll with right-edge wrap
#[derive(Debug, Clone, Copy)]
pub struct PipePhysics {
    /// Origin restored by the collision reset
    home: f32,
}

impl PipePhysics {
    pub fn new(home: f32) -> Self {
        Self { home }
    }

    fn wrap(&self, body: &mut Body, ctx: &mut SimContext) {
        let right = SCREEN_WIDTH as f32;
        body.begin_phase(right, ctx.now());
        body.pos.x = right;
        body.pos.y = ctx.uniform_int(gap_band()) as f32;
        log::debug!("Pipe wrapped, new gap at y={}", body.pos.y);
    }
}

impl PhysicsComponent for PipePhysics {
    fn update(&mut self, body: &mut Body, _others: Neighbors<'_>, ctx: &mut SimContext) {
        body.sample_time(ctx);
        body.pos.x = body.origin + body.vel * body.elapsed_secs();

        if body.pos.x < 0.0 {
            self.wrap(body, ctx);
        }
    }

    fn reset(&mut self, body: &mut Body, ctx: &mut SimContext) {
        body.begin_phase(self.home, ctx.now());
        body.pos.x = self.home;
        body.pos.y = ctx.uniform_int(gap_band()) as f32;
    }
}

/// Draws the top and bottom blocks around the gap
#[derive(Debug, Clone, Copy)]
pub struct PipeGraphics {
    color: Color,
}

impl Default for PipeGraphics {
    fn default() -> Self {
        Self { color: Color::RED }
    }
}

impl GraphicsComponent for PipeGraphics {
    fn render(&self, body: &Body, renderer: &mut dyn Renderer) {
        let Shape::Gap { width, gap } = body.shape else {
            return;
        };
        for rect in shapes::pipe_rects(body.pos.x, body.pos.y, width, gap, SCREEN_HEIGHT) {
            renderer.fill_rect(rect, self.color);
        }
    }
}

/// Build the `ordinal`-th pipe at its home origin with a random gap
pub fn spawn_pipe(ordinal: usize, ctx: &mut SimContext) -> Entity {
    let home = home_origin(ordinal);
    let gap_top = ctx.uniform_int(gap_band()) as f32;
    let body = Body::new(
        Vec2::new(home, gap_top),
        home,
        PIPE_SPEED,
        ctx.now(),
        Shape::Gap {
            width: PIPE_WIDTH,
            gap: PIPE_GAP,
        },
    );
    Entity::new(
        body,
        Box::new(NoInput),
        Box::new(PipePhysics::new(home)),
        Box::new(PipeGraphics::default()),
    )
}
