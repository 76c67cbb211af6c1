//! Collector Wire Format
//!
//! The collector ingests one line-protocol measurement per report:
//!
//! ```text
//! templog,host=<id> temperature=<f>,humidity=<f>,abshumidity=<f>
//! ```
//!
//! The format is shared with an existing fleet, so it is reproduced exactly:
//! same measurement name, same tag, same field order, floats rendered to six
//! decimal places. Encoding goes into a fixed-capacity `heapless` string;
//! nothing in the reporting path allocates.

use core::fmt::Write;

use crate::errors::TransportError;
use crate::sample::Sample;

/// Capacity of the encoded measurement line (bytes).
///
/// Worst case is a 32-byte host id plus three fields at full `f32` width,
/// comfortably under this.
pub const PAYLOAD_CAPACITY: usize = 192;

/// Measurement name understood by the collector.
pub const MEASUREMENT: &str = "templog";

/// Encode one sample as a collector line.
pub fn encode(
    host: &str,
    sample: &Sample,
) -> Result<heapless::String<PAYLOAD_CAPACITY>, TransportError> {
    let mut line = heapless::String::new();
    write!(
        line,
        "{MEASUREMENT},host={host} temperature={:.6},humidity={:.6},abshumidity={:.6}",
        sample.reading.temperature_c,
        sample.reading.relative_humidity_pct,
        sample.absolute_humidity,
    )
    .map_err(|_| TransportError::PayloadTooLarge)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Reading;

    #[test]
    fn exact_line_format() {
        let mut sample = Sample::new(1000, Reading::new(21.5, 48.25));
        // Pin the derived field so the expected string is exact.
        sample.absolute_humidity = 9.0625;

        let line = encode("esp-a4cf12", &sample).unwrap();
        assert_eq!(
            line.as_str(),
            "templog,host=esp-a4cf12 temperature=21.500000,humidity=48.250000,abshumidity=9.062500"
        );
    }

    #[test]
    fn oversized_host_is_rejected_not_truncated() {
        let sample = Sample::new(0, Reading::new(20.0, 50.0));
        let long_host: std::string::String = core::iter::repeat('x').take(200).collect();

        assert_eq!(
            encode(&long_host, &sample),
            Err(TransportError::PayloadTooLarge)
        );
    }
}
