//! Time source for server-assigned timestamps.

use std::sync::Mutex;

use chrono::{Duration, SubsecRound, Utc};

use crate::domain::Timestamp;

/// Source of the current time for `created_at` / `updated_at`.
pub trait Clock: Send + Sync {
    /// Current UTC time at microsecond resolution.
    fn now(&self) -> Timestamp;
}

/// Wall clock. Truncated to microseconds so that what a store returns is
/// exactly what it persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now().naive_utc().trunc_subsecs(6)
    }
}

/// Clock that only moves when told to. Used by tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Mutex::new(start.trunc_subsecs(6)),
        }
    }

    pub fn set(&self, to: Timestamp) {
        *self.lock() = to.trunc_subsecs(6);
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.lock();
        *now = (*now + by).trunc_subsecs(6);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Timestamp> {
        // A poisoned guard still holds a valid timestamp.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.lock()
    }
}
