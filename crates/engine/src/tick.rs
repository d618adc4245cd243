//! Per-second tick cadence.

use crate::clock::Clock;
use crate::display::DisplaySink;
use crate::Engine;
use anyhow::Result;
use catalog::Resource;
use config::{REVEAL_PERIOD_SECS, ROTATE_PERIOD_SECS};

impl<R: Resource, C: Clock> Engine<R, C> {
    /// Processes one second-granularity tick from the host timer.
    ///
    /// Cadence, driven by the wall-clock second:
    /// - seconds divisible by [`ROTATE_PERIOD_SECS`]: advance the cursor
    ///   and show the new label with the definition hidden;
    /// - other seconds divisible by [`REVEAL_PERIOD_SECS`]: reveal the
    ///   definition for the unchanged cursor;
    /// - anything else: ignored, except that the very first tick always
    ///   refreshes so the display is never blank at startup.
    ///
    /// Runs to completion inside the callback; nothing is deferred.
    pub fn on_tick<S: DisplaySink>(&mut self, sink: &mut S) -> Result<()> {
        let sec = self.clock.now().sec;
        if sec % REVEAL_PERIOD_SECS != 0 && !self.first_tick {
            return Ok(());
        }
        let mut show_def = true;
        if sec % ROTATE_PERIOD_SECS == 0 {
            self.advance();
            show_def = false;
        }
        self.refresh(sink, show_def)?;
        self.first_tick = false;
        Ok(())
    }
}
