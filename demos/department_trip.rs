//! Department Trip
//!
//! This example walks a visitor through a small set of departments and
//! prints the seals held on leaving each one.
//!
//! Key concepts:
//! - Building departments with the fluent builder
//! - Conditional rules that branch on a seal
//! - A single memoized walk answering every query
//! - Loop detection
//!
//! Run with: RUST_LOG=bypass=debug cargo run --example department_trip

use bypass::builder::{BuildError, BypassListBuilder};
use bypass::core::Rule;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), BuildError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    println!("=== Department Trip Example ===\n");

    // Department 2 sends the visitor back to 1 until seal 3 is stamped.
    let bypass = BypassListBuilder::new()
        .station(1, Rule::conditional(3, (4, 1, 3), (1, 2, 2)))?
        .station(2, Rule::conditional(1, (3, 1, 1), (2, 2, 1)))?
        .station(3, Rule::unconditional(5, 4, 1))?
        .build()?;

    for station in 0..=bypass.station_count() + 1 {
        match bypass.uncrossed_seals(station) {
            (None, _) => println!("Station {station}: no such department"),
            (Some(_), None) => println!("Station {station}: never visited"),
            (Some(_), Some(snapshots)) => println!("Station {station}: left with {snapshots:?}"),
        }
    }

    println!("\nWalk order: {:?}", bypass.outcome().path_stations());
    println!("Loop detected: {}", bypass.loop_detected());

    // The same trip, but department 3 sends the visitor round again.
    let looping = BypassListBuilder::new()
        .station(1, Rule::conditional(3, (4, 1, 3), (1, 2, 2)))?
        .station(2, Rule::conditional(1, (3, 1, 1), (2, 2, 1)))?
        .station(3, Rule::unconditional(5, 4, 1))?
        .station(4, Rule::unconditional(1, 1, 1))?
        .build()?;

    println!("\nWith a fourth department:");
    println!("Walk order: {:?}", looping.outcome().path_stations());
    println!("Loop detected at: {:?}", looping.outcome().loop_at());

    println!("\n=== Example Complete ===");
    Ok(())
}
