//! Power-Cycle Controller
//!
//! ## Overview
//!
//! The controller owns the four collaborators (sensor, clock, sleep,
//! transport) plus the accumulator, and drives the node's only loop:
//! accumulate → report → pick a sleep plan → suspend → repeat. It never
//! terminates on its own; deep sleep diverges through the sleep
//! collaborator and every other path comes back around.
//!
//! ## Fault Behavior
//!
//! - A sensor fault aborts the accumulation cycle. Nothing is sent; the
//!   controller logs, sleeps the normal interval and tries again on the
//!   next wake.
//! - A transport fault is logged and the sample dropped. The cycle still
//!   completes and the node sleeps as usual.
//!
//! Capability decisions (simulated vs. real sensor, light-sleep support,
//! deep-sleep strap) are all made once, when the collaborators are
//! constructed and the schedule configured - the loop itself has no
//! platform checks.

use log::{debug, info, warn};

use crate::accumulator::{StabilityAccumulator, StabilityConfig};
use crate::constants::power::WARMUP_PAUSE_MS;
use crate::errors::SensorResult;
use crate::payload;
use crate::power::{SleepControl, SleepPlan, SleepSchedule, SleepStrategy};
use crate::sample::Sample;
use crate::sensor::Sensor;
use crate::time::Clock;
use crate::transport::Transport;

/// Longest device identity kept for the wire payload (bytes).
pub const DEVICE_ID_CAPACITY: usize = 32;

/// The node's outer loop: accumulate, report, sleep, repeat
pub struct NodeController<S, C, P, T> {
    sensor: S,
    clock: C,
    sleep: P,
    transport: T,
    accumulator: StabilityAccumulator,
    schedule: SleepSchedule,
    device_id: heapless::String<DEVICE_ID_CAPACITY>,
}

impl<S, C, P, T> NodeController<S, C, P, T>
where
    S: Sensor,
    C: Clock,
    P: SleepControl,
    T: Transport,
{
    /// Wire up a controller with the default schedule and stability
    /// parameters. Device identities longer than [`DEVICE_ID_CAPACITY`]
    /// bytes are truncated.
    pub fn new(device_id: &str, sensor: S, clock: C, sleep: P, transport: T) -> Self {
        let mut id = heapless::String::new();
        for ch in device_id.chars() {
            if id.push(ch).is_err() {
                break;
            }
        }
        Self {
            sensor,
            clock,
            sleep,
            transport,
            accumulator: StabilityAccumulator::default(),
            schedule: SleepSchedule::default(),
            device_id: id,
        }
    }

    /// Replace the sleep schedule. A deep-sleep schedule switches the
    /// accumulator to single-shot mode, since the window cannot survive the
    /// cycle anyway; call this before [`Self::with_stability`] when using
    /// both.
    pub fn with_schedule(mut self, schedule: SleepSchedule) -> Self {
        self.accumulator = StabilityAccumulator::new(StabilityConfig {
            single_shot: schedule.use_deep_sleep(),
            ..StabilityConfig::default()
        });
        self.schedule = schedule;
        self
    }

    /// Replace the stability parameters wholesale.
    pub fn with_stability(mut self, config: StabilityConfig) -> Self {
        self.accumulator = StabilityAccumulator::new(config);
        self
    }

    /// The transport, for inspection in tests.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The sleep collaborator, for inspection in tests.
    pub fn sleep(&self) -> &P {
        &self.sleep
    }

    /// The accumulator, for inspection in tests.
    pub fn accumulator(&self) -> &StabilityAccumulator {
        &self.accumulator
    }

    /// Let the sensor settle after power-up.
    ///
    /// Takes and discards the sensor's requested number of warm-up reads,
    /// tolerating failures - a sensor that is still stabilizing is exactly
    /// the case being handled. Runs once per boot, which means once per
    /// process: a light-sleep wake resumes past it, a deep-sleep wake boots
    /// a fresh process and warms up again.
    fn warm_up(&mut self) {
        let reads = self.sensor.warmup_reads();
        for n in 0..reads {
            match self.sensor.read() {
                Ok(reading) => debug!(
                    "warmup read {}/{}: {:.1} C",
                    n + 1,
                    reads,
                    reading.temperature_c
                ),
                Err(e) => debug!("warmup read {}/{} failed: {}", n + 1, reads, e),
            }
            self.sleep.idle_wait(WARMUP_PAUSE_MS);
        }
    }

    /// One full cycle: accumulate, report, sleep.
    ///
    /// Public so tests and hosted harnesses can drive cycles one at a time;
    /// firmware calls [`Self::run_forever`]. With a deep-sleep schedule this
    /// does not return.
    pub fn run_cycle(&mut self) -> SensorResult<()> {
        let sample = self
            .accumulator
            .accumulate(&mut self.sensor, &self.clock, &mut self.sleep)?;
        self.report(&sample);

        let plan = self.select_plan();
        self.execute(plan);
        self.sleep.reclaim_memory();
        Ok(())
    }

    /// Run until power-off. Never returns: deep sleep diverges through the
    /// sleep collaborator, everything else loops.
    pub fn run_forever(&mut self) -> ! {
        self.warm_up();
        loop {
            if let Err(e) = self.run_cycle() {
                warn!("cycle aborted: {}", e);
                // Retry on the next wake, not in a tight loop.
                let plan = self.select_plan();
                self.execute(plan);
            }
        }
    }

    /// Best-effort report; a transport fault costs us this sample, nothing
    /// else.
    fn report(&mut self, sample: &Sample) {
        self.transport.ensure_connected();
        match payload::encode(&self.device_id, sample) {
            Ok(line) => match self.transport.send(line.as_bytes()) {
                Ok(()) => info!("reported {} bytes to collector", line.len()),
                Err(e) => warn!("measurement dropped: {}", e),
            },
            Err(e) => warn!("measurement dropped: {}", e),
        }
    }

    fn select_plan(&self) -> SleepPlan {
        let hour = self.clock.wall_clock().hour;
        self.schedule.plan(hour, self.sleep.supports_light_sleep())
    }

    fn execute(&mut self, plan: SleepPlan) {
        debug!("sleeping {} ms ({:?})", plan.duration_ms, plan.strategy);
        match plan.strategy {
            SleepStrategy::None => {}
            SleepStrategy::IdleSpin => self.sleep.idle_wait(plan.duration_ms),
            SleepStrategy::LightSleep => self.sleep.light_sleep(plan.duration_ms),
            SleepStrategy::DeepSleep => self.sleep.deep_sleep(plan.duration_ms),
        }
    }
}
