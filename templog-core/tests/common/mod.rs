//! Shared scaffolding for integration tests
//!
//! Builds the simulated environment every scenario needs: a shared virtual
//! clock, a sleep double that advances it, and a scripted sensor.

use templog_core::power::SimSleep;
use templog_core::sample::Reading;
use templog_core::sensor::ScriptedSensor;
use templog_core::time::SimClock;

/// 2023-11-14 22:13:20 UTC; hour 22, so the day interval applies.
pub const DAY_EPOCH: u64 = 1_700_000_000;

/// A clock and a sleep double advancing it by the requested durations.
pub fn sim_env(epoch_s: u64) -> (SimClock, SimSleep) {
    let clock = SimClock::new(epoch_s);
    let sleep = SimSleep::new(clock.clone());
    (clock, sleep)
}

/// A sensor replaying `(temperature, humidity)` pairs, repeating the last.
pub fn sensor_from(pairs: &[(f32, f32)]) -> ScriptedSensor {
    let readings: std::vec::Vec<Reading> = pairs
        .iter()
        .map(|&(t, rh)| Reading::new(t, rh))
        .collect();
    ScriptedSensor::from_readings(&readings)
}
