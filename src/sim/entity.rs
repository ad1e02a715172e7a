//! Entities and their kinematic state
//!
//! Motion is closed-form: an entity's position at any instant is a function
//! of the time elapsed since its current phase began, so pausing is exact
//! and no integration error builds up.

use glam::Vec2;

use super::component::{GraphicsComponent, InputComponent, PhysicsComponent};
use super::context::SimContext;
use crate::platform::Event;
use crate::renderer::Renderer;

/// Collision/draw footprint of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// The bird: a circle centred on the position
    Circle { radius: f32 },
    /// A pipe: a vertical opening of height `gap` whose top edge is at
    /// the entity's y, blocked everywhere else across `width` pixels
    Gap { width: f32, gap: f32 },
}

/// Kinematic state of one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Axis value the current phase is measured from
    pub origin: f32,
    /// Signed velocity along the entity's motion axis, pixels/s
    pub vel: f32,
    /// Clock time the current phase began (ms)
    pub phase_start: u64,
    /// Last sampled clock time (ms); frozen while paused
    pub current_time: u64,
    pub shape: Shape,
}

impl Body {
    pub fn new(pos: Vec2, origin: f32, vel: f32, now: u64, shape: Shape) -> Self {
        Self {
            pos,
            origin,
            vel,
            phase_start: now,
            current_time: now,
            shape,
        }
    }

    /// Seconds since the current phase began
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_time.saturating_sub(self.phase_start) as f32 / 1000.0
    }

    /// Start a new motion phase at `origin`
    ///
    /// The sampled time is moved along with the phase start so elapsed time
    /// stays non-negative even while paused.
    pub fn begin_phase(&mut self, origin: f32, now: u64) {
        self.origin = origin;
        self.phase_start = now;
        self.current_time = self.current_time.max(now);
    }

    /// Sample the clock unless the simulation is paused
    pub fn sample_time(&mut self, ctx: &SimContext) {
        if !ctx.is_paused() {
            self.current_time = ctx.now();
        }
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self.shape, Shape::Gap { .. })
    }

    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Gap { .. } => None,
        }
    }
}

/// A simulated object: kinematic state plus one behavior of each kind
#[derive(Debug)]
pub struct Entity {
    pub body: Body,
    input: Box<dyn InputComponent>,
    physics: Box<dyn PhysicsComponent>,
    graphics: Box<dyn GraphicsComponent>,
}

impl Entity {
    pub fn new(
        body: Body,
        input: Box<dyn InputComponent>,
        physics: Box<dyn PhysicsComponent>,
        graphics: Box<dyn GraphicsComponent>,
    ) -> Self {
        Self {
            body,
            input,
            physics,
            graphics,
        }
    }

    pub fn handle_input(&mut self, event: Event, ctx: &SimContext) {
        self.input.handle(&mut self.body, event, ctx);
    }

    pub fn update(&mut self, others: Neighbors<'_>, ctx: &mut SimContext) {
        self.physics.update(&mut self.body, others, ctx);
    }

    pub fn reset(&mut self, ctx: &mut SimContext) {
        self.physics.reset(&mut self.body, ctx);
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.graphics.render(&self.body, renderer);
    }
}

/// Every entity of the registry except the one being updated
#[derive(Debug, Clone, Copy)]
pub struct Neighbors<'a> {
    before: &'a [Entity],
    after: &'a [Entity],
}

impl<'a> Neighbors<'a> {
    pub fn new(before: &'a [Entity], after: &'a [Entity]) -> Self {
        Self { before, after }
    }

    pub fn empty() -> Self {
        Self::new(&[], &[])
    }

    /// Bodies in registry order
    pub fn bodies(self) -> impl Iterator<Item = &'a Body> + 'a {
        self.before.iter().chain(self.after.iter()).map(|e| &e.body)
    }

    /// Obstacle bodies in registry order
    pub fn obstacles(self) -> impl Iterator<Item = &'a Body> + 'a {
        self.bodies().filter(|b| b.is_obstacle())
    }
}
