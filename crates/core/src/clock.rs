//! Millisecond clock used for id generation and `createdAt` stamps.
//!
//! Stores receive an `Arc<dyn Clock>` so tests can substitute a
//! [`ManualClock`] and get deterministic ids.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use crate::types::Timestamp;

/// Source of "now" for the store layer.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch. Never decreases between calls.
    fn now_millis(&self) -> i64;

    /// The same instant as a UTC timestamp.
    fn now(&self) -> Timestamp {
        DateTime::<Utc>::from_timestamp_millis(self.now_millis()).unwrap_or_default()
    }
}

/// Wall clock clamped to be monotonic non-decreasing.
///
/// Two calls inside the same millisecond return the same value; ids derived
/// from it can collide under rapid creation.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let wall = Utc::now().timestamp_millis();
        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}

/// Test clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(start_millis),
        }
    }

    /// Move the clock forward by `delta` milliseconds.
    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}
