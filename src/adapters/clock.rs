//! Clock adapters.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually driven clock for tests and scripted runs.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned. Use [`SystemClock`]
/// outside of tests.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance_secs(&self, secs: u64) {
        let mut now = self.now.write().expect("ManualClock: write lock poisoned");
        *now = now.plus_secs(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.read().expect("ManualClock: read lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new(Timestamp::from_unix_secs(100));
        assert_eq!(clock.now(), Timestamp::from_unix_secs(100));
        clock.advance_secs(5);
        assert_eq!(clock.now(), Timestamp::from_unix_secs(105));
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(!clock.now().is_before(&first));
    }
}
