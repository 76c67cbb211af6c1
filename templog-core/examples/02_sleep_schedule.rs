//! Sleep Schedule Walkthrough
//!
//! Prints the sleep plan the controller would pick for every hour of the
//! day, across the three capability combinations a real fleet contains.
//!
//! Run with: cargo run --example 02_sleep_schedule

use templog_core::{SleepSchedule, SleepStrategy};

fn describe(strategy: SleepStrategy) -> &'static str {
    match strategy {
        SleepStrategy::None => "none",
        SleepStrategy::IdleSpin => "idle spin",
        SleepStrategy::LightSleep => "light sleep",
        SleepStrategy::DeepSleep => "deep sleep",
    }
}

fn main() {
    println!("Sleep Schedule Walkthrough");
    println!("==========================\n");

    let default = SleepSchedule::default();
    let deep = SleepSchedule::default().with_deep_sleep(true);

    println!("hour | light-sleep HW    | no light sleep    | deep-sleep strap");
    println!("-----+-------------------+-------------------+------------------");
    for hour in 0..24u8 {
        let a = default.plan(hour, true);
        let b = default.plan(hour, false);
        let c = deep.plan(hour, true);
        println!(
            "  {:2} | {:>4} s {:<11} | {:>4} s {:<11} | {:>4} s {}",
            hour,
            a.duration_ms / 1000,
            describe(a.strategy),
            b.duration_ms / 1000,
            describe(b.strategy),
            c.duration_ms / 1000,
            describe(c.strategy),
        );
    }

    println!("\nHours 0-3 stretch the cycle; nobody reads dashboards at night.");
}
