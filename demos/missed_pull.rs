//! Missed Pull
//!
//! This example releases the drag short of the commit zone and walks
//! through the snap-back and failure flow.
//!
//! Key concepts:
//! - Snap back to the start position on a missed release
//! - Gesture input gated while the failure confirmation is pending
//! - The Committing pass-through on the way to Failure
//!
//! Run with: cargo run --example missed_pull

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

    println!("=== Missed Pull Example ===\n");

    let bounds = ViewBounds::new(0.0, 100.0).unwrap();
    let mut tracker = GestureTracker::new(bounds);
    let mut machine = InteractionBuilder::new()
        .zone(CommitZone::new(60.0, 80.0).unwrap())
        .max_offset(100.0)
        .render(TracingRender)
        .requester(MockOutcomeRequester::new())
        .build()
        .unwrap();

    machine.handle(tracker.begin()).await;
    machine.handle(tracker.update(35.0)).await;
    println!(
        "Released at offset {}, zone center {}: too far away",
        machine.offset(),
        machine.zone().center()
    );
    machine.handle(tracker.end()).await;

    println!("\nFinal state: {:?}", machine.state());
    println!("Path: {:?}", machine.history().path());
    println!("(note the Idle snap-back and the Committing pass-through)");

    println!("\n=== Example Complete ===");
}
