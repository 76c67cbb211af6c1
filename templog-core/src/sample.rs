//! Sensor Readings and Timestamped Samples
//!
//! A [`Reading`] is what the sensor hands over; a [`Sample`] is a reading
//! pinned to a timestamp with the absolute humidity already derived. Samples
//! are immutable once created and `Copy`, so the window can shuffle them
//! around without allocation.

use crate::constants::sensors::{
    DHT22_HUMIDITY_MAX_PCT, DHT22_HUMIDITY_MIN_PCT, DHT22_TEMP_MAX_C, DHT22_TEMP_MIN_C,
};
use crate::errors::{SensorError, SensorResult};
use crate::humidity::absolute_humidity;
use crate::time::Timestamp;

/// Check a value against the plausible range of the sensor hardware
fn check_range(value: f32, min: f32, max: f32) -> SensorResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(SensorError::ImplausibleReading { value, min, max });
    }
    Ok(())
}

/// One temperature/humidity pair as delivered by the sensor collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%RH)
    pub relative_humidity_pct: f32,
}

impl Reading {
    /// Create a reading from raw sensor values.
    pub const fn new(temperature_c: f32, relative_humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            relative_humidity_pct,
        }
    }

    /// Reject values the hardware cannot have measured.
    ///
    /// DHT22-class sensors occasionally deliver frames that pass the wire
    /// checksum but decode to nonsense; those must not enter the window,
    /// where they would either trigger a spurious report or poison the
    /// reference sample.
    pub fn validate(&self) -> SensorResult<()> {
        check_range(self.temperature_c, DHT22_TEMP_MIN_C, DHT22_TEMP_MAX_C)?;
        check_range(
            self.relative_humidity_pct,
            DHT22_HUMIDITY_MIN_PCT,
            DHT22_HUMIDITY_MAX_PCT,
        )?;
        Ok(())
    }
}

/// A reading pinned to a wall-clock timestamp, with absolute humidity derived
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Seconds since epoch at the moment of the read
    pub timestamp: Timestamp,
    /// The raw reading
    pub reading: Reading,
    /// Water vapor mass per air volume (g/m³), derived at construction
    pub absolute_humidity: f32,
}

impl Sample {
    /// Pin a reading to a timestamp and derive its absolute humidity.
    pub fn new(timestamp: Timestamp, reading: Reading) -> Self {
        Self {
            timestamp,
            reading,
            absolute_humidity: absolute_humidity(
                reading.temperature_c,
                reading.relative_humidity_pct,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_reading_passes() {
        assert!(Reading::new(21.5, 48.0).validate().is_ok());
        // Extremes of the measurable range are still valid.
        assert!(Reading::new(-40.0, 0.0).validate().is_ok());
        assert!(Reading::new(80.0, 100.0).validate().is_ok());
    }

    #[test]
    fn implausible_reading_rejected() {
        let err = Reading::new(-55.0, 40.0).validate().unwrap_err();
        assert!(matches!(err, SensorError::ImplausibleReading { .. }));

        assert!(Reading::new(20.0, 120.0).validate().is_err());
    }

    #[test]
    fn nan_reading_rejected() {
        assert!(Reading::new(f32::NAN, 40.0).validate().is_err());
        assert!(Reading::new(20.0, f32::INFINITY).validate().is_err());
    }

    #[test]
    fn sample_derives_absolute_humidity() {
        let sample = Sample::new(1000, Reading::new(20.0, 50.0));
        assert_eq!(sample.timestamp, 1000);
        assert!((sample.absolute_humidity - 8.64).abs() < 1e-2);
    }
}
