//! Collector Transports for templog Nodes
//!
//! ## Overview
//!
//! The core crate only knows the [`Transport`](templog_core::Transport)
//! trait; this crate provides the concrete adapters a deployed node links
//! in. Today that is HTTP, which is what the existing collector fleet
//! ingests.
//!
//! ## Why HTTP?
//!
//! For a node that reports one small line every few minutes, HTTP's header
//! overhead is irrelevant next to the radio wakeup itself, and it buys:
//! - direct ingestion by the existing collector (no bridge process)
//! - universal firewall compatibility on household networks
//! - trivially debuggable traffic
//!
//! ## Delivery Semantics
//!
//! Sends are strictly best-effort, by design: a failed send drops the
//! sample, and the next cycle produces a fresher one. There is no buffering,
//! no retry, no backoff. The collector's HTTP status is logged but never
//! branched on - as far as the node is concerned, a 500 is still a
//! completed conversation.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpReporter};

/// Delivery statistics common to all transports
#[derive(Debug, Default, Clone)]
pub struct ConnectionStats {
    /// Measurements handed to the network successfully
    pub messages_sent: u64,
    /// Measurements dropped on transport faults
    pub messages_failed: u64,
    /// Payload bytes sent
    pub bytes_sent: u64,
}
