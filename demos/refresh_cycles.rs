//! Refresh Cycles
//!
//! This example runs several interaction cycles on one machine using the
//! reset transition, including a simulated outage, then dumps the full
//! history as JSON.
//!
//! Key concepts:
//! - Reset from a terminal state back to Idle
//! - Transport errors resolved explicitly to Failure
//! - Serializable interaction history
//!
//! Run with: cargo run --example refresh_cycles

use snapback::builder::InteractionBuilder;
use snapback::core::CommitZone;
use snapback::effects::{MockOutcomeRequester, TracingRender};
use snapback::gesture::{GestureTracker, ViewBounds};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Refresh Cycles Example ===\n");

    let bounds = ViewBounds::new(0.0, 100.0).unwrap();

    // Cycle 1: a clean hit.
    let mut tracker = GestureTracker::new(bounds);
    let mut machine = InteractionBuilder::new()
        .zone(CommitZone::new(60.0, 80.0).unwrap())
        .max_offset(100.0)
        .render(TracingRender)
        .requester(MockOutcomeRequester::new())
        .build()
        .unwrap();

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(70.0)).await;
    machine.handle(tracker.end()).await;
    println!("Cycle 1 (hit):  {:?}", machine.state());

    // Cycle 2: a miss.
    machine.reset();
    tracker.sync(0.0);
    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(15.0)).await;
    machine.handle(tracker.end()).await;
    println!("Cycle 2 (miss): {:?}", machine.state());

    // Cycle 3: a hit during an outage still resolves, to Failure.
    let mut offline = InteractionBuilder::new()
        .zone(CommitZone::new(60.0, 80.0).unwrap())
        .max_offset(100.0)
        .render(TracingRender)
        .requester(MockOutcomeRequester::new().with_outage("gateway unreachable"))
        .build()
        .unwrap();

    let mut tracker = GestureTracker::new(bounds);
    offline.handle(tracker.begin()).await;
    offline.handle(tracker.update(70.0)).await;
    offline.handle(tracker.end()).await;
    println!("Cycle 3 (hit, outage): {:?}", offline.state());

    let json = serde_json::to_string_pretty(machine.history()).unwrap();
    println!("\nHistory of the first machine:\n{json}");

    println!("\n=== Example Complete ===");
}
