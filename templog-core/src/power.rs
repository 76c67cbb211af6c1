//! Sleep Planning and the Sleep Collaborator
//!
//! ## Overview
//!
//! After every report the node picks a [`SleepPlan`]: how long to stay down
//! and which suspension primitive to use. Duration comes from the hour of
//! day (long overnight, short otherwise); the strategy comes from device
//! capability, decided once at startup rather than re-probed every cycle.
//!
//! ## Strategy Ladder
//!
//! - [`SleepStrategy::DeepSleep`] - RAM is lost, wake restarts the firmware.
//!   Chosen only when the deep-sleep hardware flag is set, because it also
//!   destroys the carried reference sample (an accepted data loss).
//! - [`SleepStrategy::LightSleep`] - RAM and program state survive, wake
//!   resumes in place. The default when the platform supports it.
//! - [`SleepStrategy::IdleSpin`] - plain blocking wait with the CPU idling.
//!   The fallback for platforms without a low-power timer.
//! - [`SleepStrategy::None`] - no suspension at all; never scheduled, but a
//!   valid plan for callers that drive cadence externally.

use crate::constants::power::{
    DAY_REPORT_INTERVAL_S, NIGHT_END_HOUR, NIGHT_REPORT_INTERVAL_S, NIGHT_START_HOUR,
};
use crate::constants::sampling::MS_PER_SECOND;

/// How the node suspends between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepStrategy {
    /// No suspension; return immediately
    None,
    /// Blocking wait with the CPU idling, state intact
    IdleSpin,
    /// Low-power mode preserving RAM; wake resumes the same execution
    LightSleep,
    /// Low-power mode losing RAM; wake restarts the firmware
    DeepSleep,
}

/// One sleep decision: duration plus strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPlan {
    /// How long to stay suspended (ms)
    pub duration_ms: u32,
    /// Which suspension primitive to use
    pub strategy: SleepStrategy,
}

impl SleepPlan {
    /// A plan that does not suspend at all.
    pub const fn none() -> Self {
        Self {
            duration_ms: 0,
            strategy: SleepStrategy::None,
        }
    }
}

/// Hour-of-day driven sleep selection
#[derive(Debug, Clone)]
pub struct SleepSchedule {
    night_start_hour: u8,
    night_end_hour: u8,
    night_interval_ms: u32,
    day_interval_ms: u32,
    use_deep_sleep: bool,
}

impl Default for SleepSchedule {
    fn default() -> Self {
        Self {
            night_start_hour: NIGHT_START_HOUR,
            night_end_hour: NIGHT_END_HOUR,
            night_interval_ms: NIGHT_REPORT_INTERVAL_S * MS_PER_SECOND,
            day_interval_ms: DAY_REPORT_INTERVAL_S * MS_PER_SECOND,
            use_deep_sleep: false,
        }
    }
}

impl SleepSchedule {
    /// Request deep sleep between cycles (set from a hardware strap or
    /// build-time choice, never toggled at runtime).
    pub fn with_deep_sleep(mut self, use_deep_sleep: bool) -> Self {
        self.use_deep_sleep = use_deep_sleep;
        self
    }

    /// Override the night/day report intervals (seconds).
    pub fn with_intervals(mut self, night_s: u32, day_s: u32) -> Self {
        self.night_interval_ms = night_s * MS_PER_SECOND;
        self.day_interval_ms = day_s * MS_PER_SECOND;
        self
    }

    /// Whether this schedule requests deep sleep.
    pub fn use_deep_sleep(&self) -> bool {
        self.use_deep_sleep
    }

    /// Sleep duration for the given hour of day (ms).
    pub fn report_interval_ms(&self, hour: u8) -> u32 {
        if (self.night_start_hour..self.night_end_hour).contains(&hour) {
            self.night_interval_ms
        } else {
            self.day_interval_ms
        }
    }

    /// Pick the plan for this hour given the platform's capabilities.
    pub fn plan(&self, hour: u8, supports_light_sleep: bool) -> SleepPlan {
        let strategy = if self.use_deep_sleep {
            SleepStrategy::DeepSleep
        } else if supports_light_sleep {
            SleepStrategy::LightSleep
        } else {
            SleepStrategy::IdleSpin
        };
        SleepPlan {
            duration_ms: self.report_interval_ms(hour),
            strategy,
        }
    }
}

/// Sleep collaborator: the platform's suspension primitives
pub trait SleepControl {
    /// Whether the platform has a light-sleep mode at all.
    fn supports_light_sleep(&self) -> bool;

    /// Blocking wait with state intact.
    fn idle_wait(&mut self, duration_ms: u32);

    /// Suspend preserving RAM; returns when the wake timer fires.
    fn light_sleep(&mut self, duration_ms: u32);

    /// Suspend losing RAM. Never returns; wake restarts the firmware.
    fn deep_sleep(&mut self, duration_ms: u32) -> !;

    /// Bounded memory-reclamation pass after a cycle. No-op by default;
    /// platforms with an allocator to trim can override.
    fn reclaim_memory(&mut self) {}

    /// Short pause between samples: light sleep when available, idle
    /// otherwise.
    fn pause(&mut self, duration_ms: u32) {
        if self.supports_light_sleep() {
            self.light_sleep(duration_ms);
        } else {
            self.idle_wait(duration_ms);
        }
    }
}

/// Simulated sleep for tests and hosted demos
///
/// Advances a shared [`SimClock`](crate::time::SimClock) instead of blocking
/// and records every suspension it was asked for. Deep sleep panics, which
/// is the closest a test double gets to "never returns".
#[cfg(feature = "std")]
pub struct SimSleep {
    clock: crate::time::SimClock,
    light_sleep_supported: bool,
    advance_per_pause_ms: Option<u64>,
    /// Every suspension executed, oldest first
    pub history: std::vec::Vec<SleepPlan>,
}

#[cfg(feature = "std")]
impl SimSleep {
    /// Create a sleep double advancing the given clock, light sleep enabled.
    pub fn new(clock: crate::time::SimClock) -> Self {
        Self {
            clock,
            light_sleep_supported: true,
            advance_per_pause_ms: None,
            history: std::vec::Vec::new(),
        }
    }

    /// Toggle the platform's light-sleep capability.
    pub fn with_light_sleep(mut self, supported: bool) -> Self {
        self.light_sleep_supported = supported;
        self
    }

    /// Advance the clock by a fixed amount per suspension instead of the
    /// requested duration, for scenarios that need exact sample spacing.
    pub fn with_fixed_advance(mut self, ms: u64) -> Self {
        self.advance_per_pause_ms = Some(ms);
        self
    }

    fn record(&mut self, strategy: SleepStrategy, duration_ms: u32) {
        let advance = self
            .advance_per_pause_ms
            .unwrap_or(u64::from(duration_ms));
        self.clock.advance_ms(advance);
        self.history.push(SleepPlan {
            duration_ms,
            strategy,
        });
    }
}

#[cfg(feature = "std")]
impl SleepControl for SimSleep {
    fn supports_light_sleep(&self) -> bool {
        self.light_sleep_supported
    }

    fn idle_wait(&mut self, duration_ms: u32) {
        self.record(SleepStrategy::IdleSpin, duration_ms);
    }

    fn light_sleep(&mut self, duration_ms: u32) {
        self.record(SleepStrategy::LightSleep, duration_ms);
    }

    fn deep_sleep(&mut self, duration_ms: u32) -> ! {
        panic!("deep sleep for {duration_ms} ms: firmware restarts here");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Clock, SimClock};

    #[test]
    fn night_hours_select_long_interval() {
        let schedule = SleepSchedule::default();
        for hour in 0..4 {
            assert_eq!(schedule.report_interval_ms(hour), 600_000, "hour {hour}");
        }
    }

    #[test]
    fn day_hours_select_short_interval() {
        let schedule = SleepSchedule::default();
        for hour in [4, 12, 23] {
            assert_eq!(schedule.report_interval_ms(hour), 360_000, "hour {hour}");
        }
    }

    #[test]
    fn strategy_ladder() {
        let schedule = SleepSchedule::default();
        assert_eq!(schedule.plan(12, true).strategy, SleepStrategy::LightSleep);
        assert_eq!(schedule.plan(12, false).strategy, SleepStrategy::IdleSpin);

        let deep = SleepSchedule::default().with_deep_sleep(true);
        // Deep sleep wins regardless of light-sleep capability.
        assert_eq!(deep.plan(12, true).strategy, SleepStrategy::DeepSleep);
        assert_eq!(deep.plan(2, false).duration_ms, 600_000);
    }

    #[test]
    fn sim_sleep_advances_clock_and_records() {
        let clock = SimClock::new(1000);
        let mut sleep = SimSleep::new(clock.clone());

        sleep.pause(31_000);
        assert_eq!(clock.now(), 1031);
        assert_eq!(
            sleep.history.last(),
            Some(&SleepPlan {
                duration_ms: 31_000,
                strategy: SleepStrategy::LightSleep
            })
        );

        let mut no_light = SimSleep::new(clock.clone()).with_light_sleep(false);
        no_light.pause(1_000);
        assert_eq!(no_light.history[0].strategy, SleepStrategy::IdleSpin);
    }
}
