use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::value_objects::NanoTimestamp;

/// Wall-clock nanosecond source that never repeats or goes backwards.
///
/// Each reading is `max(now, previous + 1)`.
#[derive(Debug, Default)]
pub struct MonotonicNanos {
    last: AtomicI64,
}

impl MonotonicNanos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> NanoTimestamp {
        self.next_after(wall_clock_nanos())
    }

    fn next_after(&self, now: i64) -> NanoTimestamp {
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous.saturating_add(1));
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return NanoTimestamp::from_nanos(candidate),
                Err(actual) => previous = actual,
            }
        }
    }
}

fn wall_clock_nanos() -> i64 {
    // None only past the year 2262
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
