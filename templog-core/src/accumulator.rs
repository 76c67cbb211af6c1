//! Stability Window Accumulator
//!
//! ## Decision Loop
//!
//! The accumulator answers one question, sample by sample: has the
//! environment been stable enough for long enough that reporting now is
//! worth a radio wakeup? Each iteration reads the sensor, derives absolute
//! humidity, appends to the window, paces to the next sample slot and then
//! re-evaluates. The loop keeps going while ALL of these hold:
//!
//! - the reference (oldest) sample is younger than the stability horizon,
//! - temperature has drifted less than the threshold since the reference,
//! - relative humidity has drifted less than its threshold,
//! - the window has room for another sample.
//!
//! Any condition failing ends the loop: drift means conditions changed and
//! the collector should hear about it; an expired horizon bounds staleness
//! even when nothing changed at all.
//!
//! On exit the most recent sample is returned and the window collapses to
//! just that sample, which becomes the next cycle's reference. A
//! single-sample window is trivially stable, so after a collapse the loop
//! always takes at least one more reading before it can report again.
//!
//! ## Single-Shot Mode
//!
//! A node configured for deep sleep loses the window with the rest of RAM
//! every cycle, so drift measured against a carried reference is impossible
//! and pacing a window that cannot grow is wasted battery. In single-shot
//! mode the accumulator returns the first valid sample immediately.

use libm::fabsf;
use log::{debug, info};

use crate::constants::sampling::{
    HUMIDITY_STABILITY_THRESHOLD_PCT, MS_PER_SECOND, SAMPLE_CADENCE_S, STABILITY_HORIZON_S,
    TEMP_STABILITY_THRESHOLD_C, WINDOW_CAPACITY,
};
use crate::errors::SensorResult;
use crate::power::SleepControl;
use crate::sample::Sample;
use crate::sensor::Sensor;
use crate::time::Clock;
use crate::window::SampleWindow;

/// Tunable parameters of the stability decision
#[derive(Debug, Clone)]
pub struct StabilityConfig {
    /// Maximum age of the reference sample before a report is forced (s)
    pub horizon_s: u32,
    /// Temperature drift that ends the window (°C)
    pub temp_threshold_c: f32,
    /// Relative-humidity drift that ends the window (%RH)
    pub humidity_threshold_pct: f32,
    /// Target spacing between samples (s)
    pub cadence_s: u32,
    /// Report after the first valid sample (deep-sleep nodes)
    pub single_shot: bool,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            horizon_s: STABILITY_HORIZON_S,
            temp_threshold_c: TEMP_STABILITY_THRESHOLD_C,
            humidity_threshold_pct: HUMIDITY_STABILITY_THRESHOLD_PCT,
            cadence_s: SAMPLE_CADENCE_S,
            single_shot: false,
        }
    }
}

/// Accumulates samples until the window is judged stable, then reports one
pub struct StabilityAccumulator {
    config: StabilityConfig,
    window: SampleWindow<WINDOW_CAPACITY>,
}

impl Default for StabilityAccumulator {
    fn default() -> Self {
        Self::new(StabilityConfig::default())
    }
}

impl StabilityAccumulator {
    /// Create an accumulator with an empty window (cold boot).
    pub fn new(config: StabilityConfig) -> Self {
        Self {
            config,
            window: SampleWindow::new(),
        }
    }

    /// The window as it stands; mainly for diagnostics and tests.
    pub fn window(&self) -> &SampleWindow<WINDOW_CAPACITY> {
        &self.window
    }

    /// The active configuration.
    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    /// Sample until the window is stable, then return the latest sample.
    ///
    /// Afterwards the window holds exactly the returned sample. A sensor
    /// fault aborts the whole cycle; the window keeps whatever it had, and
    /// the controller decides when to try again.
    pub fn accumulate<S, C, P>(
        &mut self,
        sensor: &mut S,
        clock: &C,
        pacer: &mut P,
    ) -> SensorResult<Sample>
    where
        S: Sensor,
        C: Clock,
        P: SleepControl,
    {
        loop {
            let reading = sensor.read()?;
            reading.validate()?;

            let sample = Sample::new(clock.now(), reading);
            let wall = clock.wall_clock();
            info!(
                "[{:02}:{:02}:{:02}.{:03}] {:.1} C ({:.1} % rel.H {:4.1} abs.H)",
                wall.hour,
                wall.minute,
                wall.second,
                wall.subsec_ms,
                sample.reading.temperature_c,
                sample.reading.relative_humidity_pct,
                sample.absolute_humidity,
            );

            let rejected = self.window.push(sample).is_err();
            debug!("window holds {} samples", self.window.len());

            if self.config.single_shot || rejected {
                self.window.reset_to(sample);
                return Ok(sample);
            }

            pacer.pause(self.pacing_delay_ms(wall.subsec_ms));

            if self.window.is_full() || !self.keep_sampling(&sample) {
                self.window.reset_to(sample);
                return Ok(sample);
            }
        }
    }

    /// Delay that lands the next sample just past a round wall-clock second.
    fn pacing_delay_ms(&self, subsec_ms: u16) -> u32 {
        MS_PER_SECOND.saturating_sub(u32::from(subsec_ms)) + self.config.cadence_s * MS_PER_SECOND
    }

    /// The continue condition: reference still young, no drift past either
    /// threshold.
    fn keep_sampling(&self, latest: &Sample) -> bool {
        let Some(reference) = self.window.reference() else {
            return true;
        };

        let elapsed = latest.timestamp.saturating_sub(reference.timestamp);

        elapsed < u64::from(self.config.horizon_s)
            && fabsf(reference.reading.temperature_c - latest.reading.temperature_c)
                < self.config.temp_threshold_c
            && fabsf(reference.reading.relative_humidity_pct - latest.reading.relative_humidity_pct)
                < self.config.humidity_threshold_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SensorError;
    use crate::power::SimSleep;
    use crate::sample::Reading;
    use crate::sensor::ScriptedSensor;
    use crate::time::SimClock;

    const EPOCH: u64 = 1_700_000_000;

    #[test]
    fn temperature_drift_ends_window_with_latest() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor =
            ScriptedSensor::from_readings(&[Reading::new(20.0, 50.0), Reading::new(20.5, 50.0)]);
        let mut acc = StabilityAccumulator::default();

        let sample = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();

        assert_eq!(sample.reading.temperature_c, 20.5);
        assert_eq!(sensor.reads_served(), 2);
    }

    #[test]
    fn window_collapses_to_returned_sample() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor =
            ScriptedSensor::from_readings(&[Reading::new(20.0, 50.0), Reading::new(21.0, 50.0)]);
        let mut acc = StabilityAccumulator::default();

        let sample = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();

        assert_eq!(acc.window().len(), 1);
        assert_eq!(acc.window().latest(), Some(&sample));
        assert_eq!(acc.window().reference(), Some(&sample));
    }

    #[test]
    fn constant_stream_forced_out_at_horizon() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor = ScriptedSensor::constant(Reading::new(21.0, 45.0));
        let mut acc = StabilityAccumulator::default();

        let sample = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();

        let horizon = u64::from(acc.config().horizon_s);
        assert!(sample.timestamp >= EPOCH + horizon);
        // One pacing interval of slack, no more.
        assert!(sample.timestamp < EPOCH + horizon + 62);
    }

    #[test]
    fn full_window_forces_report_without_touching_reference() {
        let clock = SimClock::new(EPOCH);
        // One-second advances: the horizon is unreachable before capacity.
        let mut sleep = SimSleep::new(clock.clone()).with_fixed_advance(1000);
        let mut sensor = ScriptedSensor::constant(Reading::new(21.0, 45.0));
        let mut acc = StabilityAccumulator::default();

        let sample = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();

        assert_eq!(sensor.reads_served(), WINDOW_CAPACITY);
        assert_eq!(acc.window().len(), 1);
        assert_eq!(acc.window().latest(), Some(&sample));
    }

    #[test]
    fn single_shot_reports_first_sample_without_pacing() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor = ScriptedSensor::constant(Reading::new(19.0, 55.0));
        let mut acc = StabilityAccumulator::new(StabilityConfig {
            single_shot: true,
            ..StabilityConfig::default()
        });

        let sample = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();

        assert_eq!(sample.timestamp, EPOCH);
        assert_eq!(sensor.reads_served(), 1);
        assert!(sleep.history.is_empty());
    }

    #[test]
    fn carried_sample_is_next_reference() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        // First cycle exits on drift; second cycle drifts from the carried
        // reference, not from its own first reading.
        let mut sensor = ScriptedSensor::from_readings(&[
            Reading::new(20.0, 50.0),
            Reading::new(21.0, 50.0),
            Reading::new(21.05, 50.0),
        ]);
        let mut acc = StabilityAccumulator::default();

        let first = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();
        assert_eq!(first.reading.temperature_c, 21.0);

        let second = acc.accumulate(&mut sensor, &clock, &mut sleep).unwrap();
        // 21.05 is within threshold of the carried 21.0, so the cycle ran on
        // until the horizon forced it out; the reference was the carry.
        assert_eq!(second.reading.temperature_c, 21.05);
        assert!(second.timestamp >= first.timestamp + u64::from(acc.config().horizon_s));
    }

    #[test]
    fn sensor_fault_propagates() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor = ScriptedSensor::new();
        let mut acc = StabilityAccumulator::default();

        assert_eq!(
            acc.accumulate(&mut sensor, &clock, &mut sleep),
            Err(SensorError::NotResponding)
        );
    }

    #[test]
    fn implausible_reading_propagates() {
        let clock = SimClock::new(EPOCH);
        let mut sleep = SimSleep::new(clock.clone());
        let mut sensor = ScriptedSensor::constant(Reading::new(-60.0, 50.0));
        let mut acc = StabilityAccumulator::default();

        assert!(matches!(
            acc.accumulate(&mut sensor, &clock, &mut sleep),
            Err(SensorError::ImplausibleReading { .. })
        ));
    }

    #[test]
    fn pacing_lands_past_the_next_round_second() {
        let acc = StabilityAccumulator::default();
        assert_eq!(acc.pacing_delay_ms(0), 31_000);
        assert_eq!(acc.pacing_delay_ms(250), 30_750);
        assert_eq!(acc.pacing_delay_ms(999), 30_001);
    }
}
