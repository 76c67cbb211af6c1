//! Stability-Window Sampling Parameters
//!
//! These constants define when the accumulator stops sampling and reports.
//! Earlier firmware revisions disagreed on some of them (a 10-minute horizon,
//! 2-10 minute sleeps); the values here are the canonical set and the only
//! ones this implementation supports.

/// Milliseconds per second, for phase-alignment arithmetic.
pub const MS_PER_SECOND: u32 = 1000;

/// Stability horizon (s).
///
/// Upper bound on the age of the reference sample. Once the window spans this
/// long, a report goes out even if conditions never drifted, so a reading is
/// never staler than the horizon plus one sleep interval.
pub const STABILITY_HORIZON_S: u32 = 15 * 60;

/// Temperature drift that ends a stability window (°C).
///
/// Matches the resolution step of DHT22-class sensors; anything smaller is
/// indistinguishable from quantization noise.
pub const TEMP_STABILITY_THRESHOLD_C: f32 = 0.1;

/// Relative-humidity drift that ends a stability window (%RH).
///
/// Three times the sensor's 0.1 %RH resolution step, because consecutive
/// humidity readings jitter more than temperature readings do.
pub const HUMIDITY_STABILITY_THRESHOLD_PCT: f32 = 0.3;

/// Target spacing between consecutive samples (s).
///
/// The actual pause is phase-aligned so samples land just past a round
/// wall-clock second; see the accumulator's pacing calculation.
pub const SAMPLE_CADENCE_S: u32 = 30;

/// Capacity of the stability window (samples).
///
/// One horizon at the canonical cadence is 30 samples, plus the carried
/// reference sample, rounded up to a power of two. A full window forces a
/// report rather than overwriting the reference.
pub const WINDOW_CAPACITY: usize = 32;
