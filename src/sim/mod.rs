//! Simulation core
//!
//! All gameplay logic lives here:
//! - Entities compose one input, one physics and one graphics behavior
//! - Motion is evaluated in closed form from each entity's phase start
//! - The registry is fixed-size and updated in index order every frame
//! - A collision pauses time; the next frame resets everyone in place

pub mod bird;
pub mod collision;
pub mod component;
pub mod context;
pub mod entity;
pub mod pipe;
pub mod registry;
pub mod tick;

pub use collision::{Wall, circle_hits_pipe, viewport_clamp};
pub use component::{GraphicsComponent, InputComponent, NoInput, PhysicsComponent};
pub use context::SimContext;
pub use entity::{Body, Entity, Neighbors, Shape};
pub use registry::{BIRD, FIRST_PIPE, Registry};
pub use tick::{FrameStats, LoopState, Simulation};
