//! Platform abstraction layer
//!
//! The simulation core consumes these interfaces; hosts provide them:
//! - Time/ticks (`Clock`)
//! - Input events (`InputSource`)

pub mod clock;
pub mod input;

pub use clock::{ManualClock, SystemClock};
pub use input::{Autopilot, QueuedInput};

/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never decreases.
    fn now_ms(&self) -> u64;
}

/// A host input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Close the game
    Quit,
    /// Flap (any key press)
    PrimaryAction,
    /// Anything else the host saw this frame
    Other,
}

/// Source of the events that arrived since the previous frame
pub trait InputSource {
    /// Drain buffered events in arrival order. Called once per frame.
    fn poll(&mut self) -> Vec<Event>;
}
