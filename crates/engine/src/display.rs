//! Display sink boundary.

use crate::clock::Clock;
use crate::Engine;
use anyhow::Result;
use catalog::Resource;

/// A two-slot string display: one line for the label, one area for the
/// definition body.
pub trait DisplaySink {
    /// Replaces the label text.
    fn set_label(&mut self, text: &str);

    /// Replaces the body text.
    fn set_body(&mut self, text: &str);
}

impl<R: Resource, C: Clock> Engine<R, C> {
    /// Loads the current record and pushes both fields into `sink`.
    ///
    /// With `show_def == false` the body slot is cleared — the record is
    /// still parsed in full, only the presentation drops the definition.
    /// An empty catalog leaves the sink untouched.
    pub fn refresh<S: DisplaySink>(&self, sink: &mut S, show_def: bool) -> Result<()> {
        if self.catalog.is_empty() {
            return Ok(());
        }
        let record = self.catalog.load(self.current, show_def)?;
        sink.set_label(&record.label);
        sink.set_body(&record.body);
        Ok(())
    }
}
