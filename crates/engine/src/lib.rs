//! # Engine — rotation engine for the definition catalog
//!
//! The central orchestrator that ties the [`catalog`] and [`lfsr`] crates
//! into the component a host ticks once per second: it owns the indexed
//! catalog, the current-record cursor and the reseedable bit generator, and
//! pushes records into a display sink.
//!
//! ## Control flow
//!
//! ```text
//! host timer (1 Hz)
//!   |
//!   v
//! ┌──────────────────────────────────────────────────┐
//! │                     ENGINE                       │
//! │                                                  │
//! │ tick.rs    → on_tick(): cadence gate             │
//! │                 |                                │
//! │                 |  rotation beat?                │
//! │                 v                                │
//! │ rotate.rs  → advance(): sequential wrap, or      │
//! │              reseed-from-clock + uniform draw    │
//! │                 |                                │
//! │                 v                                │
//! │ display.rs → refresh(): load record, push        │
//! │              label/body into the sink            │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module      | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `lib.rs`    | `Engine` struct, constructor, accessors, `Debug`   |
//! | [`clock`]   | coarse wall-clock fields, seed fold, `SystemClock` |
//! | [`rotate`]  | `advance()` with the two rotation policies         |
//! | [`display`] | `DisplaySink` trait, `refresh()`                   |
//! | [`tick`]    | `on_tick()` per-second cadence                     |
//!
//! Everything runs synchronously inside the tick callback: no background
//! work, no locks, single owner. The catalog index is immutable after
//! construction; cursor and generator state change only inside `advance`.
mod clock;
mod display;
mod rotate;
mod tick;

pub use clock::{Clock, ClockFields, SystemClock};
pub use display::DisplaySink;
pub use rotate::{RotationMode, DEFAULT_ROTATION_MODE};

use anyhow::Result;
use catalog::{Catalog, Record, Resource};
use lfsr::Lfsr;

/// The rotation engine: indexed catalog + cursor + bit generator.
pub struct Engine<R: Resource, C: Clock> {
    pub(crate) catalog: Catalog<R>,
    pub(crate) clock: C,
    pub(crate) rng: Lfsr,
    pub(crate) mode: RotationMode,
    /// Index of the record currently displayed. Always in `[0, total)`
    /// unless the catalog is empty, in which case it stays 0.
    pub(crate) current: usize,
    /// Set until the first tick is processed; the first tick always
    /// refreshes the display regardless of the cadence gate.
    pub(crate) first_tick: bool,
}

impl<R: Resource, C: Clock> Engine<R, C> {
    /// Indexes `resource` and seeds the generator from `clock`.
    ///
    /// Capacity and record-length limits come from [`config`]. An empty or
    /// unreadable resource yields a working engine with `total() == 0`;
    /// rotation and refresh are then no-ops and the caller decides whether
    /// that is fatal.
    pub fn new(resource: R, clock: C, mode: RotationMode) -> Self {
        let catalog = Catalog::open(resource, config::MAX_RECORDS, config::MAX_RECORD_LENGTH);
        let seed = clock.now().seed();
        Self {
            catalog,
            clock,
            rng: Lfsr::new(seed),
            mode,
            current: 0,
            first_tick: true,
        }
    }

    /// Number of records reachable in the catalog.
    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.total()
    }

    /// Index of the record currently displayed.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// The active rotation policy.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// The indexed catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog<R> {
        &self.catalog
    }

    /// Loads the record under the cursor without touching any state.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog is empty (there is nothing at the
    /// cursor) or the resource read fails.
    pub fn load_current(&self, show_def: bool) -> Result<Record> {
        Ok(self.catalog.load(self.current, show_def)?)
    }
}

impl<R: Resource, C: Clock> std::fmt::Debug for Engine<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("total", &self.total())
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("first_tick", &self.first_tick)
            .finish()
    }
}

#[cfg(test)]
mod tests;
