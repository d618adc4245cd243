use crate::{Clock, ClockFields, DisplaySink};
use catalog::MemResource;
use std::cell::Cell;
use std::rc::Rc;

/// Clock frozen at one timestamp.
pub struct FixedClock(pub ClockFields);

impl Clock for FixedClock {
    fn now(&self) -> ClockFields {
        self.0
    }
}

/// Clock a test can move while the engine holds a clone of it.
#[derive(Clone)]
pub struct SharedClock(Rc<Cell<ClockFields>>);

impl SharedClock {
    pub fn new(fields: ClockFields) -> Self {
        Self(Rc::new(Cell::new(fields)))
    }

    pub fn set(&self, fields: ClockFields) {
        self.0.set(fields);
    }
}

impl Clock for SharedClock {
    fn now(&self) -> ClockFields {
        self.0.get()
    }
}

/// Timestamp on an arbitrary fixed afternoon, varying only the second.
pub fn fields_at(sec: u32) -> ClockFields {
    ClockFields {
        sec,
        min: 4,
        hour: 13,
        mday: 7,
    }
}

/// Sink that records every push.
#[derive(Default)]
pub struct VecSink {
    pub labels: Vec<String>,
    pub bodies: Vec<String>,
}

impl DisplaySink for VecSink {
    fn set_label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }

    fn set_body(&mut self, text: &str) {
        self.bodies.push(text.to_string());
    }
}

pub fn five_records() -> MemResource {
    MemResource::from(
        "zero\tfirst definition\none\tsecond\ntwo\tthird\nthree\tfourth\nfour\tfifth\n",
    )
}
