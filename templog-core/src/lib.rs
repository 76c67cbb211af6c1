//! Core sampling and power-cycle engine for templog
//!
//! Drives a battery-powered temperature/humidity node: readings accumulate in
//! a stability window until conditions have settled (or a horizon forces the
//! issue), one sample goes to the collector, then the node picks a sleep
//! strategy from the time of day and suspends.
//!
//! Key constraints:
//! - Runs on 32KB-class MCUs (no heap in the sampling path)
//! - One logical task; sleeping is the only suspension point
//! - Deep sleep destroys all volatile state by design
//!
//! ```no_run
//! use templog_core::{
//!     accumulator::StabilityAccumulator,
//!     power::SimSleep,
//!     sample::Reading,
//!     sensor::ScriptedSensor,
//!     time::SimClock,
//! };
//!
//! let clock = SimClock::new(1_700_000_000);
//! let mut sleep = SimSleep::new(clock.clone());
//! let mut sensor = ScriptedSensor::constant(Reading::new(21.0, 48.0));
//! let mut acc = StabilityAccumulator::default();
//!
//! // Runs until the window is stable for the whole horizon.
//! match acc.accumulate(&mut sensor, &clock, &mut sleep) {
//!     Ok(_sample) => { /* report it */ }
//!     Err(_e) => { /* log and retry next wake */ }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod accumulator;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod humidity;
pub mod payload;
pub mod power;
pub mod sample;
pub mod sensor;
pub mod time;
pub mod transport;
pub mod window;

// Public API
pub use accumulator::{StabilityAccumulator, StabilityConfig};
pub use controller::NodeController;
pub use errors::{SensorError, SensorResult, TransportError};
pub use humidity::absolute_humidity;
pub use power::{SleepControl, SleepPlan, SleepSchedule, SleepStrategy};
pub use sample::{Reading, Sample};
pub use sensor::Sensor;
pub use time::{Clock, Timestamp, WallClock};
pub use transport::Transport;
pub use window::SampleWindow;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
