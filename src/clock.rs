use chrono::{DateTime, Utc};

/// A source of wall-clock time for the generation timestamp.
///
/// Generators never read the system clock themselves; the timestamp is an
/// input like everything else, so a fixed clock makes every output
/// byte-for-byte reproducible in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock. This is the default for [`Renderer`](crate::render::Renderer).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
