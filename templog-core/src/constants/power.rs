//! Sleep Scheduling Parameters
//!
//! After each report the node sleeps until the next accumulation cycle. The
//! interval depends on the hour of day: overnight nobody is watching the
//! dashboards, so the node stretches its cycle to save battery.

/// First hour (inclusive) of the night window.
pub const NIGHT_START_HOUR: u8 = 0;

/// First hour past the night window.
pub const NIGHT_END_HOUR: u8 = 4;

/// Sleep between reports during the night window (s).
pub const NIGHT_REPORT_INTERVAL_S: u32 = 10 * 60;

/// Sleep between reports during the day (s).
pub const DAY_REPORT_INTERVAL_S: u32 = 6 * 60;

/// Pause between warm-up reads (ms).
///
/// DHT22-class sensors need about two seconds between conversions.
pub const WARMUP_PAUSE_MS: u32 = 2000;

/// Throwaway reads a freshly powered DHT22 wants before values settle.
pub const DHT22_WARMUP_READS: u8 = 3;
