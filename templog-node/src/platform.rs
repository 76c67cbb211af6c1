//! Host Capability Providers
//!
//! A hosted node has no DHT22 on a GPIO pin and no low-power timer, so the
//! capability providers here stand in for both: readings are randomized in
//! the same band a reference indoor sensor produces, and sleeping is plain
//! thread blocking. The controller neither knows nor cares.

use std::thread;
use std::time::Duration;

use log::info;
use rand::Rng;

use templog_core::{Reading, SensorResult, SleepControl};

/// Randomized stand-in for a DHT22: 18.0-21.1 degC, 40-55 %RH.
pub struct SimulatedSensor {
    rng: rand::rngs::ThreadRng,
}

impl SimulatedSensor {
    /// Create a simulated sensor.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl templog_core::Sensor for SimulatedSensor {
    fn read(&mut self) -> SensorResult<Reading> {
        // Tenth-of-a-degree steps, like the hardware reports.
        let temperature_c = self.rng.gen_range(180..=211) as f32 / 10.0;
        let relative_humidity_pct = self.rng.gen_range(40..=55) as f32;
        Ok(Reading::new(temperature_c, relative_humidity_pct))
    }
}

/// Host sleep: no light-sleep mode, so every plan falls back to idle spin.
/// Deep sleep ends the process; a supervisor restart is the hosted
/// equivalent of a wake-from-deep-sleep boot.
pub struct HostSleep;

impl SleepControl for HostSleep {
    fn supports_light_sleep(&self) -> bool {
        false
    }

    fn idle_wait(&mut self, duration_ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(duration_ms)));
    }

    fn light_sleep(&mut self, duration_ms: u32) {
        // Never selected while supports_light_sleep is false; behave
        // sensibly anyway.
        self.idle_wait(duration_ms);
    }

    fn deep_sleep(&mut self, duration_ms: u32) -> ! {
        info!("deep sleep for {duration_ms} ms; exiting for supervisor restart");
        std::process::exit(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use templog_core::Sensor;

    #[test]
    fn simulated_readings_stay_in_band() {
        let mut sensor = SimulatedSensor::new();
        for _ in 0..100 {
            let reading = sensor.read().unwrap();
            assert!((18.0..=21.1).contains(&reading.temperature_c));
            assert!((40.0..=55.0).contains(&reading.relative_humidity_pct));
            assert!(reading.validate().is_ok());
        }
    }

    #[test]
    fn host_sleep_has_no_light_sleep() {
        assert!(!HostSleep.supports_light_sleep());
    }
}
