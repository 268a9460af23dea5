use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Time-based id source: ids are millisecond timestamps, bumped past the
/// previously issued id whenever the clock has not advanced. Unique within
/// one process, which is all the single-instance model requires.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicI64,
}

impl TimestampIds {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    pub fn next(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, candidate, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }

    /// String form, for user ids.
    pub fn next_string(&self) -> String {
        self.next().to_string()
    }

    /// Raise the floor past an id seen in loaded data, so freshly issued
    /// ids never collide with records persisted by an earlier run.
    pub fn observe(&self, seen: i64) {
        self.last.fetch_max(seen, Ordering::SeqCst);
    }
}
