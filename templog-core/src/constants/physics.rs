//! Physical Constants for Humidity Conversion
//!
//! The node's only derived metric is absolute humidity, computed from a
//! Magnus-form approximation of saturation vapor pressure. The constants
//! below define that approximation; they feed the stability test, so their
//! values must not drift between firmware revisions.

/// Offset between the Celsius and Kelvin scales (K).
///
/// Used to express air temperature in Kelvin for the ideal-gas step of the
/// absolute-humidity conversion.
///
/// Source: NIST Special Publication 330 (2019)
pub const CELSIUS_TO_KELVIN_OFFSET: f32 = 273.15;

/// Magnus-form exponent coefficient (dimensionless).
///
/// `e_s(T) ∝ exp(A·T / (T + B))` with T in °C. Valid for ordinary
/// atmospheric temperatures (roughly -30 °C to +50 °C).
///
/// Source: Magnus-Tetens approximation; see
/// carnotcycle.wordpress.com/2012/08/04/how-to-convert-relative-humidity-to-absolute-humidity
pub const MAGNUS_COEFF_A: f32 = 17.67;

/// Magnus-form temperature scaling constant (°C).
///
/// The `B` in `exp(A·T / (T + B))`.
///
/// Source: Magnus-Tetens approximation (same reference as [`MAGNUS_COEFF_A`])
pub const MAGNUS_COEFF_B_C: f32 = 243.5;

/// Leading coefficient of the absolute-humidity approximation (g·K/(m³·%)).
///
/// Folds the saturation vapor pressure at the Magnus reference point together
/// with the specific gas constant of water vapor, so that
/// `AH = COEFF · RH · e_term / T_kelvin` comes out in g/m³.
///
/// Source: derived in the carnotcycle reference above
pub const ABSOLUTE_HUMIDITY_COEFF: f32 = 13.2471;
