//! Network Collaborator
//!
//! The core knows nothing about radios or sockets. It asks the
//! [`Transport`] to make sure a link exists, hands it one encoded
//! measurement, and logs the outcome. A failed send drops the sample; there
//! is no queueing and no retry, because the next cycle produces a fresher
//! reading anyway.

use crate::errors::TransportError;

/// Link to the collector endpoint
pub trait Transport {
    /// Block until the link is associated. Idempotent; a no-op on devices
    /// without a radio or with an always-on link.
    fn ensure_connected(&mut self);

    /// Best-effort send of one encoded measurement.
    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError>;
}

/// Recording transport for tests and examples
///
/// Stores every payload as UTF-8 and can be told to fail, so tests can
/// observe both the happy path and the drop-on-error path.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct RecordingTransport {
    /// Payloads received, oldest first
    pub sent: std::vec::Vec<std::string::String>,
    /// Number of `ensure_connected` calls observed
    pub connects: usize,
    /// When set, every send fails with this error
    pub fail_with: Option<TransportError>,
}

#[cfg(feature = "std")]
impl RecordingTransport {
    /// A transport that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose sends always fail.
    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }
}

#[cfg(feature = "std")]
impl Transport for RecordingTransport {
    fn ensure_connected(&mut self) {
        self.connects += 1;
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        if let Some(error) = self.fail_with {
            return Err(error);
        }
        self.sent
            .push(std::string::String::from_utf8_lossy(payload).into_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_payloads() {
        let mut transport = RecordingTransport::new();
        transport.ensure_connected();
        assert!(transport.send(b"templog,host=a temperature=1.0").is_ok());

        assert_eq!(transport.connects, 1);
        assert_eq!(transport.sent.len(), 1);
        assert!(transport.sent[0].starts_with("templog,host=a"));
    }

    #[test]
    fn failing_transport_fails() {
        let mut transport = RecordingTransport::failing(TransportError::SendFailed);
        assert_eq!(transport.send(b"x"), Err(TransportError::SendFailed));
        assert!(transport.sent.is_empty());
    }
}
