//! Wall clock port
//!
//! Age and signal timestamps are computed against an injected clock so the
//! time-based heuristics can be tested deterministically.

use chrono::{DateTime, Utc};
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and replays
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Clock pinned to a Unix millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self::new(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    pub fn advance(&self, by: chrono::Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|g| *g).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::from_millis(1_700_000_000_000);
        assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_000);

        clock.advance(chrono::Duration::minutes(5));
        assert_eq!(clock.now().timestamp_millis(), 1_700_000_300_000);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let clock = SystemClock;
        assert!(clock.now().timestamp() > 1_700_000_000);
    }
}
