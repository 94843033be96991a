//! Time helpers with a clock abstraction for testability.

use chrono::{DateTime, Utc};

/// Source of "now" in Unix milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        now_millis()
    }
}

/// Clock frozen at a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_millis: i64,
}

impl FixedClock {
    pub fn new(fixed_millis: i64) -> Self {
        Self { fixed_millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_millis
    }
}

/// Current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix millisecond timestamp as RFC 3339 in UTC.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        // given:
        let clock = SystemClock;

        // when:
        let first = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.now_millis();

        // then:
        assert!(first > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_timestamp() {
        // given:
        let clock = FixedClock::new(1_234_567_890_123);

        // when / then:
        assert_eq!(clock.now_millis(), 1_234_567_890_123);
        assert_eq!(clock.now_millis(), 1_234_567_890_123);
    }

    #[test]
    fn test_timestamp_to_rfc3339() {
        // given: 2023-01-01 00:00:00.123 UTC
        let timestamp = 1_672_531_200_123;

        // when:
        let formatted = timestamp_to_rfc3339(timestamp);

        // then:
        assert_eq!(formatted, "2023-01-01T00:00:00.123+00:00");
    }
}
