//! Scripted Pull
//!
//! This example drives a full pull-to-refresh cycle that lands inside
//! the commit zone.
//!
//! Key concepts:
//! - Wiring a gesture tracker into the machine
//! - The release decision against the commit zone
//! - Explicit outcome resolution through the mock requester
//!
//! Run with: cargo run --example scripted_pull

use snapback::builder::InteractionBuilder;
use snapback::core::CommitZone;
use snapback::effects::{MockOutcomeRequester, TracingRender};
use snapback::gesture::{GestureTracker, ViewBounds};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Scripted Pull Example ===\n");

    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let mut machine = InteractionBuilder::new()
        .zone(CommitZone::new(60.0, 80.0).unwrap())
        .max_offset(100.0)
        .render(TracingRender)
        .requester(MockOutcomeRequester::new().with_latency(Duration::from_millis(300)))
        .build()
        .unwrap();

    println!("Commit zone center: {}", machine.zone().center());
    println!("Initial state: {:?}\n", machine.state());

    machine.handle(tracker.begin()).await;
    for delta in [12.0, 31.0, 48.0, 65.0] {
        machine.handle(tracker.update(delta)).await;
        println!("Dragged to offset {}", machine.offset());
    }

    println!("\nReleasing at offset {} ...", machine.offset());
    machine.handle(tracker.end()).await;

    println!("\nFinal state: {:?}", machine.state());
    println!("Path: {:?}", machine.history().path());

    println!("\n=== Example Complete ===");
}
