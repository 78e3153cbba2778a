//! Time and id sources for the data context.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that starts at a fixed instant and advances by `step` on every
/// reading. A zero step gives a frozen clock.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self::ticking(instant, Duration::zero())
    }

    pub fn ticking(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

/// Issues entity ids from the Unix time in milliseconds.
///
/// Ids are strictly increasing within a process: when the clock has not moved
/// past the last issued id, the next id is the last one plus one. A seed at
/// `i64::MAX` cannot be exceeded, so the sequence restarts from the clock;
/// callers that need uniqueness against stored ids check for collisions.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Starts after the highest numeric id already in use.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing.into_iter().filter_map(|id| id.parse::<i64>().ok()).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = if millis > self.last {
            millis
        } else {
            self.last.checked_add(1).unwrap_or(millis)
        };
        self.last = id;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_never_repeat_on_a_frozen_clock() {
        let now = Utc::now();
        let mut ids = IdGenerator::default();
        let first = ids.next(now);
        let second = ids.next(now);
        assert_eq!(first, now.timestamp_millis().to_string());
        assert_eq!(second, (now.timestamp_millis() + 1).to_string());
    }

    #[test]
    fn seeded_generator_skips_existing_ids() {
        let mut ids = IdGenerator::seeded(["5", "not-a-number", "12"]);
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert_eq!(ids.next(epoch), "13");
    }

    #[test]
    fn seed_at_the_top_of_the_range_does_not_overflow() {
        let mut ids = IdGenerator::seeded(["9223372036854775807"]);
        let now = Utc::now();
        let first = ids.next(now);
        let second = ids.next(now);
        assert_eq!(first, now.timestamp_millis().to_string());
        assert_eq!(second, (now.timestamp_millis() + 1).to_string());
    }

    #[test]
    fn ticking_clock_advances_per_reading() {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        let clock = FixedClock::ticking(start, Duration::seconds(1));
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(1));
    }
}
