//! Cursor advancement policies.

use crate::clock::Clock;
use crate::Engine;
use catalog::Resource;

/// How the cursor moves on a rotation beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Walk the catalog in record order, wrapping at the end.
    Sequential,
    /// Jump to a uniformly drawn record, reseeding from the clock first.
    Randomized,
}

/// Policy compiled in as the default.
pub const DEFAULT_ROTATION_MODE: RotationMode = RotationMode::Randomized;

impl<R: Resource, C: Clock> Engine<R, C> {
    /// Moves the cursor one rotation step and returns its new value.
    ///
    /// An empty catalog is a no-op: the cursor stays at 0. In randomized
    /// mode a single-record catalog short-circuits to 0 — the sampler is
    /// only consulted when `total > 1`.
    ///
    /// Randomized draws reseed the generator from the current clock fields
    /// on every call, not once at startup. A draw is therefore a pure
    /// function of the coarse timestamp: restarted processes do not replay
    /// a stale sequence inside the same time window, and tests inject a
    /// fixed clock to pin the outcome.
    pub fn advance(&mut self) -> usize {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        self.current = match self.mode {
            RotationMode::Sequential => (self.current + 1) % total,
            RotationMode::Randomized => {
                if total < 2 {
                    0
                } else {
                    self.rng.reseed(self.clock.now().seed());
                    self.rng.uniform_int(total as u32) as usize
                }
            }
        };
        self.current
    }
}
