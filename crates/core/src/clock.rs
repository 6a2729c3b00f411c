// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so telemetry and status derivation can be tested.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use chrono::{NaiveDateTime, TimeDelta};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Manually driven clock for tests. Clones share the same time.
    #[derive(Clone, Debug)]
    pub struct FakeClock {
        now: Arc<Mutex<NaiveDateTime>>,
    }

    impl FakeClock {
        pub fn new(start: NaiveDateTime) -> Self {
            Self {
                now: Arc::new(Mutex::new(start)),
            }
        }

        pub fn set(&self, now: NaiveDateTime) {
            *self.now.lock() = now;
        }

        pub fn advance(&self, by: TimeDelta) {
            let mut now = self.now.lock();
            *now += by;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> NaiveDateTime {
            *self.now.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
