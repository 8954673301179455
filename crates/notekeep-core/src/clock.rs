//! Time sources for note timestamps.

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
use chrono::Duration;
use chrono::{DateTime, Utc};

/// Supplies the current time to the note store.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// Strictly monotonic, so tests can compare `updated_at` values.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

#[cfg(test)]
impl SteppingClock {
    pub const fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }

    /// Time the next call to [`Clock::now`] will return.
    pub fn peek(&self) -> DateTime<Utc> {
        self.next.get()
    }
}

#[cfg(test)]
impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stepping_clock_is_strictly_monotonic() {
        let start = Utc.timestamp_opt(1_000, 0).unwrap();
        let clock = SteppingClock::new(start, Duration::seconds(1));

        let first = clock.now();
        let second = clock.now();
        assert_eq!(first, start);
        assert!(second > first);
        assert_eq!(clock.peek(), start + Duration::seconds(2));
    }
}
