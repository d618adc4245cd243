//! Coarse wall-clock source used for reseeding.

use chrono::{Datelike, Local, Timelike};

/// A coarse wall-clock snapshot: whole seconds, no sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFields {
    /// Seconds within the minute, `0..=59`.
    pub sec: u32,
    /// Minutes within the hour, `0..=59`.
    pub min: u32,
    /// Hours within the day, `0..=23`.
    pub hour: u32,
    /// Day of the month, `1..=31`.
    pub mday: u32,
}

impl ClockFields {
    /// Folds the fields into a 16-bit generator seed: seconds elapsed
    /// since the start of the month, truncated to the low 16 bits.
    ///
    /// Deliberately time-correlated — two runs in the same second draw the
    /// same sequence, runs a second apart diverge. Certain timestamps fold
    /// to zero; the generator's own seeding rule corrects that.
    #[must_use]
    pub fn seed(&self) -> u16 {
        let secs = self.sec + 60 * self.min + 3_600 * self.hour + 86_400 * self.mday;
        (secs & 0xFFFF) as u16
    }
}

/// Source of coarse wall-clock fields.
pub trait Clock {
    /// The current time, quantized to whole seconds.
    fn now(&self) -> ClockFields;
}

/// System clock in local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockFields {
        let t = Local::now();
        ClockFields {
            sec: t.second(),
            min: t.minute(),
            hour: t.hour(),
            mday: t.day(),
        }
    }
}
