//! HTTP Reporter - Line-Protocol POST to the Collector
//!
//! ## Wire Contract
//!
//! The collector expects the measurement line as the raw body of a POST to a
//! fixed path, with `Accept: */*` and
//! `Content-Type: application/x-www-form-urlencoded`. `Host` and
//! `Content-Length` come from the HTTP client. The response's status line is
//! logged for the benefit of whoever is tailing the node's console and is
//! otherwise ignored.
//!
//! ## Fault Mapping
//!
//! Only transport-level faults (DNS, refused connection, mid-request drop)
//! count as failures and surface as
//! [`TransportError::SendFailed`](templog_core::TransportError). An HTTP
//! error status is a completed conversation with the collector and is
//! treated as success; validating it is the collector's problem, not the
//! node's.

use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use templog_core::{Transport, TransportError};

use crate::ConnectionStats;

/// Configuration errors raised before any traffic flows
#[derive(Debug, Error)]
pub enum HttpError {
    /// Host or path cannot form a valid request URL
    #[error("configuration error: {0}")]
    Config(String),
}

/// HTTP reporter configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Collector hostname (no scheme, no path)
    pub host: String,
    /// Ingestion path, including any query string
    pub path: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent presented to the collector
    pub user_agent: String,
}

impl HttpConfig {
    /// Configuration for the given collector host with the default
    /// ingestion path.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: "/write?db=templogger".into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("templog/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the ingestion path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the per-request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// Transport implementation POSTing measurement lines over HTTP
pub struct HttpReporter {
    url: String,
    agent: ureq::Agent,
    stats: ConnectionStats,
}

impl HttpReporter {
    /// Build a reporter, validating the configuration up front.
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        if config.host.is_empty() || config.host.contains('/') {
            return Err(HttpError::Config(format!(
                "host must be a bare hostname, got {:?}",
                config.host
            )));
        }
        if !config.path.starts_with('/') {
            return Err(HttpError::Config(format!(
                "path must be absolute, got {:?}",
                config.path
            )));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            url: format!("http://{}{}", config.host, config.path),
            agent,
            stats: ConnectionStats::default(),
        })
    }

    /// Delivery statistics since construction.
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }
}

impl Transport for HttpReporter {
    fn ensure_connected(&mut self) {
        // Link association belongs to the platform; at this layer HTTP is
        // stateless and each send stands alone.
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        let body = core::str::from_utf8(payload).map_err(|_| TransportError::SendFailed)?;

        let result = self
            .agent
            .post(&self.url)
            .set("Accept", "*/*")
            .set("Content-Type", "application/x-www-form-urlencoded")
            .send_string(body);

        match result {
            Ok(response) => {
                info!("> {} {}", response.status(), response.status_text());
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += payload.len() as u64;
                Ok(())
            }
            Err(ureq::Error::Status(code, response)) => {
                // The collector answered; its opinion is logged, not acted on.
                info!("> {} {}", code, response.status_text());
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += payload.len() as u64;
                Ok(())
            }
            Err(ureq::Error::Transport(e)) => {
                warn!("send to collector failed: {e}");
                self.stats.messages_failed += 1;
                Err(TransportError::SendFailed)
            }
        }
    }
}
