//! Clock Abstraction for the Sampling Loop
//!
//! The core needs two views of time: a seconds-since-epoch counter for
//! window arithmetic, and a calendar view for the hour-of-day sleep decision
//! plus phase-aligned sample pacing. Both come from the [`Clock`]
//! collaborator so the whole decision loop runs against simulated time in
//! tests.
//!
//! Timestamp continuity across deep sleep is NOT assumed; the clock domain
//! may reset with the rest of volatile state, and the loop only ever
//! compares timestamps taken within one window.

/// Seconds since epoch (or since boot on platforms without wall time)
pub type Timestamp = u64;

/// Calendar view of the current instant
///
/// Only `hour` and `subsec_ms` drive decisions; the remaining fields exist
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallClock {
    /// Calendar year
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
    /// Milliseconds past the current second, 0-999
    pub subsec_ms: u16,
}

/// Source of time for the node
pub trait Clock {
    /// Current timestamp in whole seconds.
    fn now(&self) -> Timestamp;

    /// Calendar view of the current instant.
    fn wall_clock(&self) -> WallClock;
}

/// System clock for hosted builds (std)
///
/// Wall-clock fields come from local time, since the night window in the
/// sleep schedule is meant in the household's timezone.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    fn wall_clock(&self) -> WallClock {
        use chrono::{Datelike, Local, Timelike};

        let now = Local::now();
        WallClock {
            year: now.year() as u16,
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            subsec_ms: now.timestamp_subsec_millis() as u16,
        }
    }
}

/// Simulated clock for tests and hosted demos
///
/// Clones are cheap handles onto one shared instant, so a sleep double can
/// advance the same clock the accumulator reads. Calendar fields are derived
/// in UTC for determinism.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SimClock {
    millis: std::rc::Rc<core::cell::Cell<u64>>,
}

#[cfg(feature = "std")]
impl SimClock {
    /// Create a clock at the given seconds-since-epoch instant.
    pub fn new(epoch_s: u64) -> Self {
        Self {
            millis: std::rc::Rc::new(core::cell::Cell::new(epoch_s * 1000)),
        }
    }

    /// Move the shared instant forward.
    pub fn advance_ms(&self, ms: u64) {
        self.millis.set(self.millis.get() + ms);
    }

    /// Jump the shared instant to a new epoch second.
    pub fn set_epoch_s(&self, epoch_s: u64) {
        self.millis.set(epoch_s * 1000);
    }
}

#[cfg(feature = "std")]
impl Clock for SimClock {
    fn now(&self) -> Timestamp {
        self.millis.get() / 1000
    }

    fn wall_clock(&self) -> WallClock {
        use chrono::{DateTime, Datelike, Timelike};

        let ms = self.millis.get();
        let Some(utc) = DateTime::from_timestamp((ms / 1000) as i64, 0) else {
            return WallClock::default();
        };
        WallClock {
            year: utc.year() as u16,
            month: utc.month() as u8,
            day: utc.day() as u8,
            hour: utc.hour() as u8,
            minute: utc.minute() as u8,
            second: utc.second() as u8,
            subsec_ms: (ms % 1000) as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_clock_advances_shared_instant() {
        let clock = SimClock::new(1_700_000_000);
        let handle = clock.clone();

        handle.advance_ms(2500);

        assert_eq!(clock.now(), 1_700_000_002);
        assert_eq!(clock.wall_clock().subsec_ms, 500);
    }

    #[test]
    fn sim_clock_calendar_fields() {
        // 2023-11-14 22:13:20 UTC
        let clock = SimClock::new(1_700_000_000);
        let wall = clock.wall_clock();

        assert_eq!(wall.year, 2023);
        assert_eq!(wall.month, 11);
        assert_eq!(wall.day, 14);
        assert_eq!(wall.hour, 22);
        assert_eq!(wall.minute, 13);
        assert_eq!(wall.second, 20);
    }

    #[test]
    fn system_clock_runs() {
        let clock = SystemClock;
        assert!(clock.now() > 0);
        assert!(clock.wall_clock().hour < 24);
    }
}
