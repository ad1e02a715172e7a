//! The bird: the one controllable entity
//!
//! Flapping starts a new phase with an upward impulse; between flaps the
//! bird follows a fall parabola measured from the last phase origin.

use glam::Vec2;

use super::collision::{circle_hits_pipe, viewport_clamp};
use super::component::{GraphicsComponent, InputComponent, PhysicsComponent};
use super::context::SimContext;
use super::entity::{Body, Entity, Neighbors, Shape};
use crate::consts::*;
use crate::platform::Event;
use crate::renderer::{Renderer, SpriteHandle, SpriteLoader, shapes};

/// Height of the fall parabola at `dt` seconds into a phase
#[inline]
pub fn fall_height(origin: f32, vel: f32, dt: f32) -> f32 {
    origin + vel * dt + FALL_SHAPE * FALL_ACCEL * dt * dt
}

/// Flaps on the primary action
#[derive(Debug, Clone, Copy, Default)]
pub struct BirdInput;

impl InputComponent for BirdInput {
    fn handle(&mut self, body: &mut Body, event: Event, ctx: &SimContext) {
        if event == Event::PrimaryAction {
            body.vel = FLAP_IMPULSE;
            body.begin_phase(body.pos.y, ctx.now());
        }
    }
}

/// Fall parabola, viewport clamping and pipe collision
///
/// The radius comes from the body's circle shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirdPhysics;

impl PhysicsComponent for BirdPhysics {
    fn update(&mut self, body: &mut Body, others: Neighbors<'_>, ctx: &mut SimContext) {
        let Some(radius) = body.radius() else {
            return;
        };
        body.sample_time(ctx);
        body.pos.y = fall_height(body.origin, body.vel, body.elapsed_secs());

        if let Some((wall, y)) = viewport_clamp(body.pos.y, radius, SCREEN_HEIGHT as f32) {
            log::trace!("Bird clamped to {wall:?} wall at y={y}");
            body.pos.y = y;
            body.vel = 0.0;
            body.begin_phase(y, ctx.now());
        }

        if others
            .obstacles()
            .any(|pipe| circle_hits_pipe(body.pos, radius, pipe))
        {
            if !ctx.is_paused() {
                log::info!("Bird hit a pipe at ({:.0}, {:.0})", body.pos.x, body.pos.y);
            }
            ctx.pause();
        }
    }

    fn reset(&mut self, body: &mut Body, ctx: &mut SimContext) {
        body.vel = 0.0;
        body.begin_phase(0.0, ctx.now());
    }
}

/// Draws the bird sprite centred on its position
#[derive(Debug, Clone)]
pub struct BirdGraphics {
    /// `None` when the sprite failed to load; drawing is then a no-op
    sprite: Option<SpriteHandle>,
}

impl BirdGraphics {
    pub fn new(sprite: Option<SpriteHandle>) -> Self {
        Self { sprite }
    }

    /// Load the bird sprite, degrading to an invisible bird on failure
    pub fn load(sprites: &mut dyn SpriteLoader) -> Self {
        let sprite = match sprites.load(BIRD_SPRITE) {
            Ok(sprite) => Some(sprite),
            Err(err) => {
                log::warn!("Bird sprite unavailable, bird will not be drawn: {err}");
                None
            }
        };
        Self::new(sprite)
    }
}

impl GraphicsComponent for BirdGraphics {
    fn render(&self, body: &Body, renderer: &mut dyn Renderer) {
        if let (Some(sprite), Some(radius)) = (&self.sprite, body.radius()) {
            let (x, y) = shapes::sprite_corner(body.pos, radius);
            renderer.draw_sprite(sprite, x, y);
        }
    }
}

/// Build the bird at the top centre of the viewport, at rest
pub fn spawn_bird(ctx: &SimContext, sprites: &mut dyn SpriteLoader) -> Entity {
    let body = Body::new(
        Vec2::new(SCREEN_WIDTH as f32 / 2.0, 0.0),
        0.0,
        0.0,
        ctx.now(),
        Shape::Circle {
            radius: BIRD_RADIUS,
        },
    );
    Entity::new(
        body,
        Box::new(BirdInput),
        Box::new(BirdPhysics),
        Box::new(BirdGraphics::load(sprites)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::platform::ManualClock;
    use crate::renderer::{DrawCommand, FileSpriteLoader, FrameRecorder};
    use crate::sim::component::NoInput;
    use crate::sim::pipe::{PipeGraphics, PipePhysics};
    use tempfile::TempDir;

    struct NoSprites;

    impl SpriteLoader for NoSprites {
        fn load(&mut self, asset: &str) -> Result<SpriteHandle, AssetError> {
            Err(AssetError::NotFound(asset.into()))
        }
    }

    fn setup(start_ms: u64) -> (ManualClock, SimContext) {
        let clock = ManualClock::new(start_ms);
        let ctx = SimContext::new(Box::new(clock.clone()), 7);
        (clock, ctx)
    }

    fn bird_at(y: f32, now: u64) -> Body {
        Body::new(Vec2::new(320.0, y), y, 0.0, now, Shape::Circle { radius: 10.0 })
    }

    fn pipe(x: f32, gap_top: f32) -> Entity {
        let body = Body::new(
            Vec2::new(x, gap_top),
            x,
            -100.0,
            0,
            Shape::Gap {
                width: PIPE_WIDTH,
                gap: PIPE_GAP,
            },
        );
        Entity::new(
            body,
            Box::new(NoInput),
            Box::new(PipePhysics::new(x)),
            Box::new(PipeGraphics::default()),
        )
    }

    #[test]
    fn test_flap_starts_new_phase() {
        let (clock, ctx) = setup(1000);
        let mut body = bird_at(150.0, 0);
        clock.advance(250);

        BirdInput.handle(&mut body, Event::PrimaryAction, &ctx);
        assert_eq!(body.vel, FLAP_IMPULSE);
        assert_eq!(body.origin, 150.0);
        assert_eq!(body.phase_start, 1250);
        assert!(body.current_time >= body.phase_start);
    }

    #[test]
    fn test_other_events_ignored() {
        let (_clock, ctx) = setup(1000);
        let mut body = bird_at(150.0, 0);
        let before = body;
        BirdInput.handle(&mut body, Event::Other, &ctx);
        BirdInput.handle(&mut body, Event::Quit, &ctx);
        assert_eq!(body, before);
    }

    #[test]
    fn test_falls_along_parabola() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(100.0, 0);
        let mut physics = BirdPhysics;

        clock.advance(500);
        physics.update(&mut body, Neighbors::empty(), &mut ctx);
        // 100 + 20 * 20 * 0.25
        assert!((body.pos.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_flap_rises_then_falls() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(200.0, 0);
        let mut physics = BirdPhysics;
        BirdInput.handle(&mut body, Event::PrimaryAction, &ctx);

        let mut heights = Vec::new();
        for _ in 0..10 {
            clock.advance(100);
            physics.update(&mut body, Neighbors::empty(), &mut ctx);
            heights.push(body.pos.y);
        }
        assert!(heights[0] < 200.0);
        let apex = heights.iter().cloned().fold(f32::INFINITY, f32::min);
        assert!(apex < heights[0]);
        assert!(heights[9] > apex);
        for (i, y) in heights.iter().enumerate() {
            let dt = (i + 1) as f32 * 0.1;
            assert!((y - fall_height(200.0, FLAP_IMPULSE, dt)).abs() < 1e-2);
        }
    }

    #[test]
    fn test_clamps_to_floor() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(300.0, 0);
        let mut physics = BirdPhysics;

        clock.advance(2000);
        physics.update(&mut body, Neighbors::empty(), &mut ctx);
        assert_eq!(body.pos.y, 350.0);
        assert_eq!(body.vel, 0.0);
        assert_eq!(body.origin, 350.0);
        assert_eq!(body.phase_start, 2000);
    }

    #[test]
    fn test_clamps_to_ceiling() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(30.0, 0);
        let mut physics = BirdPhysics;
        BirdInput.handle(&mut body, Event::PrimaryAction, &ctx);

        clock.advance(100);
        physics.update(&mut body, Neighbors::empty(), &mut ctx);
        assert_eq!(body.pos.y, 10.0);
        assert_eq!(body.vel, 0.0);
    }

    #[test]
    fn test_pipe_hit_pauses() {
        let (_clock, mut ctx) = setup(0);
        let mut body = bird_at(100.0, 0);
        let mut physics = BirdPhysics;
        let pipes = [pipe(310.0, 150.0)];

        physics.update(&mut body, Neighbors::new(&[], &pipes), &mut ctx);
        assert!(ctx.is_paused());
    }

    #[test]
    fn test_touching_gap_does_not_pause() {
        let (_clock, mut ctx) = setup(0);
        // Circle top exactly on the gap's upper edge
        let mut body = bird_at(160.0, 0);
        let mut physics = BirdPhysics;
        let pipes = [pipe(310.0, 150.0)];

        physics.update(&mut body, Neighbors::new(&pipes, &[]), &mut ctx);
        assert_eq!(body.pos.y, 160.0);
        assert!(!ctx.is_paused());
    }

    #[test]
    fn test_paused_position_frozen() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(100.0, 0);
        let mut physics = BirdPhysics;

        clock.advance(200);
        physics.update(&mut body, Neighbors::empty(), &mut ctx);
        let frozen = body.pos;

        ctx.pause();
        for _ in 0..5 {
            clock.advance(100);
            physics.update(&mut body, Neighbors::empty(), &mut ctx);
            assert_eq!(body.pos, frozen);
        }
    }

    #[test]
    fn test_reset_restarts_from_top() {
        let (clock, mut ctx) = setup(0);
        let mut body = bird_at(200.0, 0);
        let mut physics = BirdPhysics;
        BirdInput.handle(&mut body, Event::PrimaryAction, &ctx);

        clock.advance(300);
        physics.reset(&mut body, &mut ctx);
        assert_eq!(body.vel, 0.0);
        assert_eq!(body.origin, 0.0);
        assert_eq!(body.phase_start, 300);

        physics.update(&mut body, Neighbors::empty(), &mut ctx);
        assert_eq!(body.pos.y, 10.0);
    }

    #[test]
    fn test_missing_sprite_draws_nothing() {
        let graphics = BirdGraphics::load(&mut NoSprites);
        let mut rec = FrameRecorder::new();
        graphics.render(&bird_at(100.0, 0), &mut rec);
        rec.present();
        assert!(rec.last_frame().is_empty());
    }

    #[test]
    fn test_undecodable_sprite_draws_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(BIRD_SPRITE), b"\x89PNG\r\n\x1a\ngarbage").unwrap();

        let graphics = BirdGraphics::load(&mut FileSpriteLoader::new(dir.path()));
        let mut rec = FrameRecorder::new();
        graphics.render(&bird_at(100.0, 0), &mut rec);
        rec.present();
        assert!(rec.last_frame().is_empty());
    }

    #[test]
    fn test_radius_read_from_shape() {
        let (clock, mut ctx) = setup(0);
        let mut body = Body::new(
            Vec2::new(320.0, 300.0),
            300.0,
            0.0,
            0,
            Shape::Circle { radius: 25.0 },
        );
        clock.advance(2000);
        BirdPhysics.update(&mut body, Neighbors::empty(), &mut ctx);
        assert_eq!(body.pos.y, 335.0);

        let sprite = SpriteHandle {
            asset: BIRD_SPRITE.to_string(),
            width: 50,
            height: 50,
        };
        let mut rec = FrameRecorder::new();
        BirdGraphics::new(Some(sprite)).render(&body, &mut rec);
        rec.present();
        assert_eq!(
            rec.last_frame(),
            &[DrawCommand::Sprite {
                asset: BIRD_SPRITE.to_string(),
                x: 295,
                y: 310,
            }]
        );
    }

    #[test]
    fn test_sprite_drawn_at_corner() {
        let sprite = SpriteHandle {
            asset: BIRD_SPRITE.to_string(),
            width: 20,
            height: 20,
        };
        let graphics = BirdGraphics::new(Some(sprite));
        let mut rec = FrameRecorder::new();
        graphics.render(&bird_at(100.0, 0), &mut rec);
        rec.present();
        assert_eq!(
            rec.last_frame(),
            &[DrawCommand::Sprite {
                asset: BIRD_SPRITE.to_string(),
                x: 310,
                y: 90,
            }]
        );
    }
}
