//! Flapper - a bird dodging an endless stream of pipes
//!
//! Core modules:
//! - `sim`: Simulation core (entities, behaviors, registry, frame loop)
//! - `platform`: Clock and input sources the core consumes
//! - `renderer`: Draw-call surface, sprite loading, headless renderers
//! - `settings`: JSON run configuration
//! - `error`: Initialization and asset error types

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, InitError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (fixed, not runtime-configurable)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 360;

    /// Bird defaults
    pub const BIRD_RADIUS: f32 = 10.0;
    /// Velocity applied on flap, pixels/s (negative = up)
    pub const FLAP_IMPULSE: f32 = -250.0;
    /// Shape constant `k` of the fall parabola `k * ACCEL * dt²`
    pub const FALL_SHAPE: f32 = 20.0;
    /// Downward acceleration term of the fall parabola
    pub const FALL_ACCEL: f32 = 20.0;
    pub const BIRD_SPRITE: &str = "bird.png";

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 40.0;
    pub const PIPE_GAP: f32 = 70.0;
    /// Scroll speed, pixels/s (negative = leftward)
    pub const PIPE_SPEED: f32 = -100.0;
    /// Distance kept between the gap band and the viewport edges
    pub const PIPE_MARGIN: i32 = 50;
    /// Number of pipes in the default population
    pub const PIPE_COUNT: usize = 4;
    /// Largest population accepted from settings
    pub const MAX_PIPE_COUNT: usize = 16;
}

/// Seconds elapsed between two millisecond timestamps
///
/// Saturates at zero when `now` precedes `last`.
#[inline]
pub fn delta_seconds(last: u64, now: u64) -> f64 {
    now.saturating_sub(last) as f64 / 1000.0
}
