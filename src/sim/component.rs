//! Behavior capabilities
//!
//! Every entity owns exactly one input, one physics and one graphics
//! behavior. Behaviors keep their own constants; the mutable kinematic state
//! lives in the entity's [`Body`].

use std::fmt::Debug;

use super::context::SimContext;
use super::entity::{Body, Neighbors};
use crate::platform::Event;
use crate::renderer::Renderer;

/// Reacts to host input events
pub trait InputComponent: Debug {
    fn handle(&mut self, body: &mut Body, event: Event, ctx: &SimContext);
}

/// Advances motion once per frame and reacts to the rest of the registry
pub trait PhysicsComponent: Debug {
    fn update(&mut self, body: &mut Body, others: Neighbors<'_>, ctx: &mut SimContext);

    /// Put the entity back in its starting phase after a collision
    fn reset(&mut self, body: &mut Body, ctx: &mut SimContext);
}

/// Issues this frame's draw calls from current state
pub trait GraphicsComponent: Debug {
    fn render(&self, body: &Body, renderer: &mut dyn Renderer);
}

/// Input behavior for entities that ignore input
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputComponent for NoInput {
    fn handle(&mut self, _body: &mut Body, _event: Event, _ctx: &SimContext) {}
}
