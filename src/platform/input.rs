//! Input sources

use std::collections::VecDeque;

use super::{Event, InputSource};

/// Events pushed by hand and drained on the next poll
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    pending: VecDeque<Event>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Vec<Event> {
        self.pending.drain(..).collect()
    }
}

/// Scripted player for the headless host
///
/// Flaps every `flap_every` frames and asks to quit once `max_frames`
/// frames have been polled.
#[derive(Debug, Clone)]
pub struct Autopilot {
    flap_every: u32,
    max_frames: Option<u64>,
    frame: u64,
}

impl Autopilot {
    pub fn new(flap_every: u32, max_frames: Option<u64>) -> Self {
        Self {
            flap_every,
            max_frames,
            frame: 0,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Vec<Event> {
        self.frame += 1;
        let mut events = Vec::new();

        if self.flap_every > 0 && self.frame.is_multiple_of(u64::from(self.flap_every)) {
            events.push(Event::PrimaryAction);
        }
        if self.max_frames.is_some_and(|max| self.frame >= max) {
            events.push(Event::Quit);
        }
        events
    }
}
