//! Sensor Collaborator
//!
//! The core never touches sensor registers; it asks a [`Sensor`]
//! implementation for one [`Reading`] at a time and propagates whatever
//! fault the hardware layer reports. Implementations live with the platform
//! code (a DHT22 driver on real hardware, a randomized simulator on hosted
//! builds); the [`ScriptedSensor`] here exists so tests and examples can
//! replay exact reading sequences.

use crate::errors::{SensorError, SensorResult};
use crate::sample::Reading;

/// Temperature/humidity sensor collaborator
pub trait Sensor {
    /// Take one measurement. Blocking; the hardware layer owns any timeout.
    fn read(&mut self) -> SensorResult<Reading>;

    /// Throwaway reads wanted after power-up before values are trustworthy.
    ///
    /// Zero for simulated sensors; DHT22-class hardware wants
    /// [`DHT22_WARMUP_READS`](crate::constants::power::DHT22_WARMUP_READS).
    fn warmup_reads(&self) -> u8 {
        0
    }
}

/// Maximum entries a scripted sensor can hold
pub const SCRIPT_CAPACITY: usize = 64;

/// Canned-sequence sensor for tests and examples
///
/// Replays its entries in order and repeats the final entry once exhausted,
/// which turns a finite script into the infinite steady-state stream the
/// stability loop expects. An empty script reads as a dead sensor.
pub struct ScriptedSensor {
    script: heapless::Vec<SensorResult<Reading>, SCRIPT_CAPACITY>,
    pos: usize,
}

impl ScriptedSensor {
    /// Create a sensor with an empty script (reads fail as not responding).
    pub fn new() -> Self {
        Self {
            script: heapless::Vec::new(),
            pos: 0,
        }
    }

    /// A sensor that reports the same reading forever.
    pub fn constant(reading: Reading) -> Self {
        Self::from_readings(&[reading])
    }

    /// A sensor that replays the given readings, then repeats the last one.
    ///
    /// Keeps at most [`SCRIPT_CAPACITY`] entries.
    pub fn from_readings(readings: &[Reading]) -> Self {
        let mut sensor = Self::new();
        for reading in readings.iter().take(SCRIPT_CAPACITY) {
            let _ = sensor.script.push(Ok(*reading));
        }
        sensor
    }

    /// Append a failing read to the script.
    pub fn then_fail(mut self, error: SensorError) -> Self {
        let _ = self.script.push(Err(error));
        self
    }

    /// Number of reads served so far.
    pub fn reads_served(&self) -> usize {
        self.pos
    }
}

impl Default for ScriptedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for ScriptedSensor {
    fn read(&mut self) -> SensorResult<Reading> {
        let entry = match self.script.get(self.pos) {
            Some(entry) => *entry,
            None => match self.script.last() {
                Some(entry) => *entry,
                None => Err(SensorError::NotResponding),
            },
        };
        self.pos = self.pos.saturating_add(1);
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_repeats_last() {
        let mut sensor =
            ScriptedSensor::from_readings(&[Reading::new(20.0, 50.0), Reading::new(21.0, 51.0)]);

        assert_eq!(sensor.read().unwrap().temperature_c, 20.0);
        assert_eq!(sensor.read().unwrap().temperature_c, 21.0);
        // Exhausted: the final entry repeats forever.
        assert_eq!(sensor.read().unwrap().temperature_c, 21.0);
        assert_eq!(sensor.read().unwrap().temperature_c, 21.0);
        assert_eq!(sensor.reads_served(), 4);
    }

    #[test]
    fn empty_script_is_a_dead_sensor() {
        let mut sensor = ScriptedSensor::new();
        assert_eq!(sensor.read(), Err(SensorError::NotResponding));
    }

    #[test]
    fn scripted_failure_repeats() {
        let mut sensor = ScriptedSensor::from_readings(&[Reading::new(20.0, 50.0)])
            .then_fail(SensorError::ChecksumMismatch);

        assert!(sensor.read().is_ok());
        assert_eq!(sensor.read(), Err(SensorError::ChecksumMismatch));
        assert_eq!(sensor.read(), Err(SensorError::ChecksumMismatch));
    }

    #[test]
    fn default_warmup_is_zero() {
        assert_eq!(ScriptedSensor::new().warmup_reads(), 0);
    }
}
