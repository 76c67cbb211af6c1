//! Sensor Specifications and Limits
//!
//! Operational limits for the DHT22/AM2302 class of combined
//! temperature/humidity sensors this node is built around. Readings outside
//! these ranges are treated as decode faults, not as weather.

/// Minimum temperature a DHT22 can measure (°C).
///
/// Source: Aosong DHT22/AM2302 datasheet
pub const DHT22_TEMP_MIN_C: f32 = -40.0;

/// Maximum temperature a DHT22 can measure (°C).
///
/// Source: Aosong DHT22/AM2302 datasheet
pub const DHT22_TEMP_MAX_C: f32 = 80.0;

/// Minimum relative humidity a DHT22 can report (%RH).
///
/// Source: physics (0 %RH = no water vapor)
pub const DHT22_HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum relative humidity a DHT22 can report (%RH).
///
/// The sensor saturates at 100 %; values above indicate a corrupt frame.
///
/// Source: Aosong DHT22/AM2302 datasheet
pub const DHT22_HUMIDITY_MAX_PCT: f32 = 100.0;
