//! Absolute Humidity from Temperature and Relative Humidity
//!
//! ## Physics Background
//!
//! Relative humidity states how close the air is to saturation at its
//! current temperature; it says nothing about the actual amount of water in
//! the air, because warm air holds far more moisture than cold air. Absolute
//! humidity is the actual mass of water vapor per unit volume (g/m³), which
//! makes readings taken at different temperatures comparable - the quantity a
//! long-running indoor-climate log actually wants.
//!
//! The conversion combines a Magnus-form approximation of saturation vapor
//! pressure with the ideal gas law:
//!
//! ```text
//! AH = 13.2471 · RH · exp(17.67·T / (T + 243.5)) / (273.15 + T)
//! ```
//!
//! with T in °C and RH in %. The approximation is good to a few percent
//! between -30 °C and +50 °C, far tighter than the sensor itself. This is
//! the node's only derived metric and it feeds the stability test, so the
//! algebraic form and constants are fixed; see [`crate::constants::physics`].

use libm::expf;

use crate::constants::physics::{
    ABSOLUTE_HUMIDITY_COEFF, CELSIUS_TO_KELVIN_OFFSET, MAGNUS_COEFF_A, MAGNUS_COEFF_B_C,
};

/// Convert a temperature/relative-humidity pair to absolute humidity (g/m³).
///
/// Inputs are not range-checked here; callers validate readings before
/// deriving from them.
pub fn absolute_humidity(temperature_c: f32, relative_humidity_pct: f32) -> f32 {
    let saturation_term = expf((MAGNUS_COEFF_A * temperature_c) / (temperature_c + MAGNUS_COEFF_B_C));

    ABSOLUTE_HUMIDITY_COEFF * relative_humidity_pct * saturation_term
        / (CELSIUS_TO_KELVIN_OFFSET + temperature_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::fabsf;

    #[test]
    fn reference_point() {
        // 20 °C at 50 %RH: textbook tables say ~8.65 g/m³; the Magnus form
        // lands at 8.639, well inside the sensor's own accuracy.
        let ah = absolute_humidity(20.0, 50.0);
        assert!(fabsf(ah - 8.639) < 1e-2, "got {ah}");
        assert!(fabsf(ah - 8.65) < 2e-2, "got {ah}");
    }

    #[test]
    fn scales_linearly_with_relative_humidity() {
        let half = absolute_humidity(20.0, 50.0);
        let full = absolute_humidity(20.0, 100.0);
        assert!(fabsf(full - 2.0 * half) < 1e-4);
    }

    #[test]
    fn warmer_air_holds_more_water() {
        assert!(absolute_humidity(30.0, 50.0) > absolute_humidity(10.0, 50.0));
    }
}
