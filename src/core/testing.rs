//! Helpers shared by unit tests.

use super::{Millis, SyncFunction, Tick, Timing};

/// A hand-written node with no extent, as a third-party implementation
/// could report.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Blip {
    timing: Timing,
}

impl SyncFunction for Blip {
    fn value_at(&mut self, _elapsed: Millis) -> f32 {
        1.0
    }

    fn period(&self) -> Millis {
        self.timing.period()
    }

    fn start_time(&self) -> Tick {
        self.timing.start_time()
    }

    fn restart_at(&mut self, now: Tick) {
        self.timing.restart_at(now);
    }
}
