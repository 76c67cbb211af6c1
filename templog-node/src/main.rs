//! Hosted templog Node
//!
//! Wires the capability providers together and hands control to the
//! power-cycle controller. There is no CLI and no config file: the collector
//! endpoint is a compile-time constant and the device identity is read once
//! at boot, exactly like the firmware builds this stands in for.

mod platform;

use log::{error, info};

use platform::{HostSleep, SimulatedSensor};
use templog_connectors::{HttpConfig, HttpReporter};
use templog_core::time::SystemClock;
use templog_core::NodeController;

/// Collector endpoint; fixed for the whole fleet.
const COLLECTOR_HOST: &str = "air.example.net";
const COLLECTOR_PATH: &str = "/write?db=templogger";

/// Identity used when the host has no machine id to read.
const FALLBACK_DEVICE_ID: &str = "host1";

/// Hardware-unique identity, read once at boot.
fn device_id() -> String {
    std::fs::read_to_string("/etc/machine-id")
        .ok()
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| FALLBACK_DEVICE_ID.to_owned())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let id = device_id();
    info!("templog node {id} starting");

    let config = HttpConfig::new(COLLECTOR_HOST).path(COLLECTOR_PATH);
    let transport = match HttpReporter::new(config) {
        Ok(reporter) => reporter,
        Err(e) => {
            error!("cannot build reporter: {e}");
            return;
        }
    };

    let mut controller =
        NodeController::new(&id, SimulatedSensor::new(), SystemClock, HostSleep, transport);

    controller.run_forever()
}
