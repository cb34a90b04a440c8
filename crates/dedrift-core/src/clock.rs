//! Injectable wall clock.

use chrono::{Local, NaiveDateTime};

/// Source of "now" for payload compilation.
///
/// Start-boundary defaults read the current local date and time; injecting
/// the clock keeps compilation a pure function of its inputs.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let clock = FixedClock(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_is_usable_as_trait_object() {
        let clock: &dyn Clock = &SystemClock;
        // Smoke test only; the value itself is nondeterministic.
        let now = clock.now();
        assert!(now.second() < 60);
    }
}
