use chrono::{Local, NaiveDateTime};

/// Represents an entity responsible for providing "now" across the
/// application. Running-timer and pace computations depend on the current
/// instant, so injecting the clock lets tests pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant. Used by tests.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
