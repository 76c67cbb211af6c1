//! Stability Window Walkthrough
//!
//! Runs the accumulator against a scripted indoor scene: steady conditions,
//! then someone opens a window and humidity jumps. Shows both exit paths -
//! drift-triggered and horizon-forced - without any hardware.
//!
//! Run with: cargo run --example 01_stability_window

use templog_core::power::SimSleep;
use templog_core::sample::Reading;
use templog_core::sensor::ScriptedSensor;
use templog_core::time::SimClock;
use templog_core::StabilityAccumulator;

fn main() {
    println!("Stability Window Walkthrough");
    println!("============================\n");

    let clock = SimClock::new(1_700_000_000);
    let mut sleep = SimSleep::new(clock.clone());
    let mut acc = StabilityAccumulator::default();

    // Scene 1: someone opens a window on the third sample.
    let mut sensor = ScriptedSensor::from_readings(&[
        Reading::new(21.2, 48.0),
        Reading::new(21.2, 48.1),
        Reading::new(20.6, 55.0),
    ]);

    println!("Scene 1: humidity jump");
    match acc.accumulate(&mut sensor, &clock, &mut sleep) {
        Ok(sample) => println!(
            "  reported after {} reads: {:.1} C, {:.1} %RH, {:.2} g/m3\n",
            sensor.reads_served(),
            sample.reading.temperature_c,
            sample.reading.relative_humidity_pct,
            sample.absolute_humidity,
        ),
        Err(e) => println!("  sensor fault: {e}\n"),
    }

    // Scene 2: conditions hold at the carried sample's values for a whole
    // horizon; the report is forced so the collector still hears from us.
    let mut sensor = ScriptedSensor::constant(Reading::new(20.6, 55.0));

    println!("Scene 2: dead calm");
    match acc.accumulate(&mut sensor, &clock, &mut sleep) {
        Ok(sample) => println!(
            "  horizon forced a report after {} reads at t={}",
            sensor.reads_served(),
            sample.timestamp,
        ),
        Err(e) => println!("  sensor fault: {e}"),
    }

    println!(
        "\nWindow now carries exactly {} sample into the next cycle.",
        acc.window().len()
    );
}
