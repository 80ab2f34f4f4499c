use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use chrono::{DateTime, Utc};

pub type DynClock = Arc<dyn Clock + Send + Sync>;

pub trait Clock: Send + Sync {
    /// Instant used for instance id suffixes. Only years `0..=9999` render
    /// as-is; anything outside is clamped to the nearest end of that range.
    fn now(&self) -> DateTime<Utc>;
}

/// UTC wall clock that never hands out the same microsecond twice.
///
/// When the wall clock has not moved since the previous call (or went
/// backwards), the previous instant plus one microsecond is returned instead.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_micros: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now();
        let wall_micros = wall.timestamp_micros();

        let mut prev = self.last_micros.load(Ordering::Acquire);
        loop {
            let next = wall_micros.max(prev.saturating_add(1));
            match self.last_micros.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return DateTime::from_timestamp_micros(next).unwrap_or(wall),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        FixedClock(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
