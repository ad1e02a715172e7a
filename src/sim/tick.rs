//! Frame loop
//!
//! One call to [`Simulation::frame`] runs a whole frame in a fixed order:
//! poll input, reset if the previous frame ended in a collision, sample the
//! clock, update every entity, then clear, render and present.

use super::context::SimContext;
use super::registry::Registry;
use crate::delta_seconds;
use crate::platform::{Event, InputSource};
use crate::renderer::{Color, Renderer, SpriteLoader};

/// Frames between FPS reports
pub const FPS_WINDOW: u64 = 120;

/// Where the loop stands after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// A collision froze time; the next frame resets the population
    PausedPendingReset,
    /// Terminal
    Quit,
}

/// Frame timing diagnostics. Motion never reads these.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub frames: u64,
    /// Clock time of the last frame (ms)
    pub last_ms: u64,
    /// Seconds between the last two frames
    pub last_dt: f64,
    window_start_ms: u64,
}

impl FrameStats {
    pub fn new(now: u64) -> Self {
        Self {
            last_ms: now,
            window_start_ms: now,
            ..Default::default()
        }
    }

    fn record(&mut self, now: u64) {
        self.last_dt = delta_seconds(self.last_ms, now);
        self.last_ms = now;
        self.frames += 1;
        log::trace!("frame {} dt={:.4}s", self.frames, self.last_dt);

        if self.frames.is_multiple_of(FPS_WINDOW) {
            let window = delta_seconds(self.window_start_ms, now);
            if window > 0.0 {
                log::debug!("{:.1} fps", FPS_WINDOW as f64 / window);
            }
            self.window_start_ms = now;
        }
    }
}

/// The registry plus everything it shares, driven one frame at a time
#[derive(Debug)]
pub struct Simulation {
    registry: Registry,
    ctx: SimContext,
    state: LoopState,
    stats: FrameStats,
}

impl Simulation {
    /// Build the population: one bird and `pipe_count` pipes
    pub fn new(pipe_count: usize, mut ctx: SimContext, sprites: &mut dyn SpriteLoader) -> Self {
        let registry = Registry::new(pipe_count, &mut ctx, sprites);
        let stats = FrameStats::new(ctx.now());
        Self {
            registry,
            ctx,
            state: LoopState::Running,
            stats,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run one frame
    pub fn frame(&mut self, input: &mut dyn InputSource, renderer: &mut dyn Renderer) -> LoopState {
        if self.state == LoopState::Quit {
            return LoopState::Quit;
        }

        let mut quit = false;
        for event in input.poll() {
            quit |= event == Event::Quit;
            self.registry.dispatch(event, &self.ctx);
        }

        if self.ctx.is_paused() {
            self.registry.reset(&mut self.ctx);
            self.ctx.resume();
            log::info!("Collision reset");
        }

        self.stats.record(self.ctx.now());
        self.registry.update(&mut self.ctx);

        renderer.clear(Color::WHITE);
        self.registry.render(renderer);
        renderer.present();

        self.state = if quit {
            LoopState::Quit
        } else if self.ctx.is_paused() {
            LoopState::PausedPendingReset
        } else {
            LoopState::Running
        };
        self.state
    }

    /// Run frames until quit, calling `pace` between frames
    ///
    /// Returns the number of frames run.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        mut pace: impl FnMut(),
    ) -> u64 {
        let start = self.stats.frames;
        while self.frame(input, renderer) != LoopState::Quit {
            pace();
        }
        log::info!("Quit after {} frames", self.stats.frames - start);
        self.stats.frames - start
    }
}
