//! The entity registry
//!
//! A fixed population built once at startup and never grown or shrunk.
//! Index [`BIRD`] holds the controllable entity; every other slot is a pipe.
//! Collisions reset the population in place.

use super::bird::spawn_bird;
use super::context::SimContext;
use super::entity::{Entity, Neighbors};
use super::pipe::spawn_pipe;
use crate::platform::Event;
use crate::renderer::{Renderer, SpriteLoader};

/// Registry index of the controllable entity
pub const BIRD: usize = 0;
/// Registry index of the first pipe
pub const FIRST_PIPE: usize = 1;

#[derive(Debug)]
pub struct Registry {
    entities: Box<[Entity]>,
}

impl Registry {
    /// Build the bird and `pipe_count` pipes
    pub fn new(pipe_count: usize, ctx: &mut SimContext, sprites: &mut dyn SpriteLoader) -> Self {
        let mut entities = Vec::with_capacity(pipe_count + 1);
        entities.push(spawn_bird(ctx, sprites));
        entities.extend((0..pipe_count).map(|ordinal| spawn_pipe(ordinal, ctx)));
        log::info!("Registry built: 1 bird, {} pipes", pipe_count);
        Self {
            entities: entities.into_boxed_slice(),
        }
    }

    /// Number of entities, bird included
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn bird(&self) -> &Entity {
        &self.entities[BIRD]
    }

    pub fn bird_mut(&mut self) -> &mut Entity {
        &mut self.entities[BIRD]
    }

    /// Pipes in registry order
    pub fn pipes(&self) -> impl Iterator<Item = &Entity> {
        self.entities[FIRST_PIPE..].iter()
    }

    #[cfg(test)]
    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// All entities in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Hand an input event to the controllable entity
    pub fn dispatch(&mut self, event: Event, ctx: &SimContext) {
        self.bird_mut().handle_input(event, ctx);
    }

    /// Run every entity's physics once, in registry order
    ///
    /// Each entity sees the others as they are at that moment: entities
    /// earlier in the registry have already moved this frame.
    pub fn update(&mut self, ctx: &mut SimContext) {
        for i in 0..self.entities.len() {
            let (before, rest) = self.entities.split_at_mut(i);
            let Some((entity, after)) = rest.split_first_mut() else {
                break;
            };
            entity.update(Neighbors::new(before, after), ctx);
        }
    }

    /// Reset every entity to its starting phase
    pub fn reset(&mut self, ctx: &mut SimContext) {
        for entity in self.entities.iter_mut() {
            entity.reset(ctx);
        }
    }

    /// Issue every entity's draw calls, in registry order
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for entity in self.entities.iter() {
            entity.render(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::ManualClock;
    use crate::renderer::{DrawCommand, FrameRecorder, SpriteHandle};
    use crate::sim::pipe::home_origin;

    struct StubSprites;

    impl SpriteLoader for StubSprites {
        fn load(&mut self, asset: &str) -> Result<SpriteHandle, crate::AssetError> {
            Ok(SpriteHandle {
                asset: asset.to_string(),
                width: 20,
                height: 20,
            })
        }
    }

    fn build(pipes: usize) -> (ManualClock, SimContext, Registry) {
        let clock = ManualClock::new(0);
        let mut ctx = SimContext::new(Box::new(clock.clone()), 3);
        let registry = Registry::new(pipes, &mut ctx, &mut StubSprites);
        (clock, ctx, registry)
    }

    #[test]
    fn test_layout() {
        let (_clock, _ctx, registry) = build(PIPE_COUNT);
        assert_eq!(registry.len(), PIPE_COUNT + 1);
        assert!(!registry.bird().body.is_obstacle());
        assert!(registry.pipes().all(|p| p.body.is_obstacle()));
        let origins: Vec<_> = registry.pipes().map(|p| p.body.origin).collect();
        assert_eq!(origins, vec![640.0, 800.0, 960.0, 1120.0]);
    }

    #[test]
    fn test_dispatch_reaches_bird_only() {
        let (_clock, ctx, mut registry) = build(2);
        let pipes_before: Vec<_> = registry.pipes().map(|p| p.body).collect();
        registry.dispatch(Event::PrimaryAction, &ctx);
        assert_eq!(registry.bird().body.vel, FLAP_IMPULSE);
        let pipes_after: Vec<_> = registry.pipes().map(|p| p.body).collect();
        assert_eq!(pipes_before, pipes_after);
    }

    #[test]
    fn test_update_moves_everything() {
        let (clock, mut ctx, mut registry) = build(4);
        registry.update(&mut ctx);
        assert_eq!(registry.bird().body.pos.y, BIRD_RADIUS);

        clock.advance(500);
        registry.update(&mut ctx);
        for (k, pipe) in registry.pipes().enumerate() {
            assert!((pipe.body.pos.x - (home_origin(k) - 50.0)).abs() < 1e-3);
        }
        for entity in registry.iter() {
            assert!(entity.body.current_time >= entity.body.phase_start);
        }
    }

    #[test]
    fn test_reset_restores_homes() {
        let (clock, mut ctx, mut registry) = build(4);
        clock.advance(2500);
        registry.update(&mut ctx);
        registry.bird_mut().handle_input(Event::PrimaryAction, &ctx);

        registry.reset(&mut ctx);
        assert_eq!(registry.bird().body.vel, 0.0);
        assert_eq!(registry.bird().body.origin, 0.0);
        for (k, pipe) in registry.pipes().enumerate() {
            assert_eq!(pipe.body.origin, home_origin(k));
            assert_eq!(pipe.body.phase_start, 2500);
        }
    }

    #[test]
    fn test_render_order() {
        let (_clock, mut ctx, mut registry) = build(2);
        registry.update(&mut ctx);
        let mut rec = FrameRecorder::new();
        registry.render(&mut rec);
        rec.present();

        let frame = rec.last_frame();
        assert_eq!(frame.len(), 1 + 2 * 2);
        assert!(matches!(frame[0], DrawCommand::Sprite { x: 310, y: 0, .. }));
        assert!(frame[1..].iter().all(|c| matches!(c, DrawCommand::FillRect(..))));
    }
}
