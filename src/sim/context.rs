//! Simulation context
//!
//! Everything the entities share: the clock, the pause switch and the RNG.
//! Owned by the simulation and only ever touched from its thread.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::Clock;

pub struct SimContext {
    clock: Box<dyn Clock>,
    /// Set by collision detection, cleared by the reset step
    paused: bool,
    rng: Pcg32,
}

impl SimContext {
    pub fn new(clock: Box<dyn Clock>, seed: u64) -> Self {
        Self {
            clock,
            paused: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Current clock time in milliseconds
    #[inline]
    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    /// True while time is frozen for every entity
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze time. Only the collision check calls this.
    pub(crate) fn pause(&mut self) {
        self.paused = true;
    }

    /// Unfreeze time. Only the reset step calls this.
    pub(crate) fn resume(&mut self) {
        self.paused = false;
    }

    /// Uniform integer in `range` (end exclusive)
    pub fn uniform_int(&mut self, range: Range<i32>) -> i32 {
        self.rng.random_range(range)
    }
}

impl std::fmt::Debug for SimContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimContext")
            .field("now", &self.now())
            .field("paused", &self.paused)
            .finish()
    }
}
