//! Error Types for Sampling and Reporting Failures
//!
//! ## Design Philosophy
//!
//! The error system follows the constraints of a battery-powered node:
//!
//! 1. **Small Size**: Variants carry at most three `f32`s so errors can be
//!    returned from the sampling hot path without indirection.
//!
//! 2. **No Heap Allocation**: No `String`, no boxed sources. All context is
//!    inline, which keeps memory usage deterministic across wake cycles.
//!
//! 3. **Copy Semantics**: Errors are `Copy` so they can be logged and
//!    re-returned without move gymnastics.
//!
//! ## Error Handling Strategy
//!
//! The two categories deliberately behave differently at the cycle level:
//!
//! - [`SensorError`] propagates out of the accumulator and aborts the current
//!   accumulation cycle. The controller logs it and retries on the next wake;
//!   there is no silent in-place retry.
//! - [`TransportError`] is caught at the send boundary. The cycle still
//!   completes and proceeds to sleep; the unsent sample is dropped, not
//!   queued.
//!
//! Neither category is fatal to the process. The node keeps cycling until
//! power is removed.

use thiserror_no_std::Error;

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Faults raised by the sensor collaborator or reading validation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Sensor did not answer on the bus within its own timeout
    #[error("sensor not responding")]
    NotResponding,

    /// A frame arrived but its checksum did not match
    #[error("sensor frame checksum mismatch")]
    ChecksumMismatch,

    /// Value decoded cleanly but lies outside what the hardware can measure
    #[error("reading {value} outside plausible range [{min}, {max}]")]
    ImplausibleReading {
        /// The decoded value that failed the plausibility check
        value: f32,
        /// Lower bound of the sensor's measurable range
        min: f32,
        /// Upper bound of the sensor's measurable range
        max: f32,
    },
}

/// Faults raised while reporting a measurement to the collector
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransportError {
    /// The collector endpoint could not be reached
    #[error("could not reach the collector")]
    ConnectFailed,

    /// The request was cut short by a transport-level fault
    #[error("send to collector failed")]
    SendFailed,

    /// The encoded measurement line did not fit the wire buffer
    #[error("encoded payload exceeds wire buffer")]
    PayloadTooLarge,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotResponding => defmt::write!(fmt, "sensor not responding"),
            Self::ChecksumMismatch => defmt::write!(fmt, "checksum mismatch"),
            Self::ImplausibleReading { value, min, max } =>
                defmt::write!(fmt, "reading {} outside [{}, {}]", value, min, max),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ConnectFailed => defmt::write!(fmt, "collector unreachable"),
            Self::SendFailed => defmt::write!(fmt, "send failed"),
            Self::PayloadTooLarge => defmt::write!(fmt, "payload too large"),
        }
    }
}
