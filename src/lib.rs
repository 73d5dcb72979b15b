//! Snapback: a pull-to-refresh interaction engine
//!
//! Snapback follows a "pure core, imperative shell" split. The release
//! decision, offset clamping, and history tracking are pure functions
//! and value types; rendering and the asynchronous confirmation call are
//! isolated behind capability traits that the state machine drives.
//!
//! # Core Concepts
//!
//! - **States**: the `Idle -> Dragging -> Committing -> Success/Failure`
//!   cycle, owned by [`effects::InteractionMachine`]
//! - **Commit zone**: the offset band within which a release counts,
//!   decided by the pure [`core::ThresholdEvaluator`]
//! - **Gesture tracking**: raw drag deltas normalized and clamped by
//!   [`gesture::GestureTracker`]
//! - **Outcome resolution**: one async confirmation per cycle through
//!   [`effects::OutcomeRequester`], resolved explicitly as a `Result`
//!
//! # Example
//!
//! ```rust
//! use snapback::core::{CommitZone, ThresholdEvaluator};
//! use snapback::gesture::{GestureEvent, GestureTracker, ViewBounds};
//!
//! let bounds = ViewBounds::new(0.0, 100.0).unwrap();
//! let mut tracker = GestureTracker::new(bounds);
//! let zone = CommitZone::new(60.0, 80.0).unwrap();
//! let evaluator = ThresholdEvaluator::default();
//!
//! tracker.begin();
//! assert_eq!(tracker.update(65.0), GestureEvent::Update(65.0));
//! tracker.end();
//!
//! // Released 5 units from the zone center, within the default tolerance.
//! assert!(evaluator.evaluate(tracker.position(), &zone));
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod gesture;

// Re-export commonly used types
pub use crate::builder::{BuildError, InteractionBuilder};
pub use crate::core::{
    CommitZone, InteractionHistory, InteractionState, StateChange, ThresholdEvaluator,
};
pub use crate::effects::{
    Confirmation, InteractionMachine, MockOutcomeRequester, Outcome, OutcomeEndpoint,
    OutcomeError, OutcomeRequester, RenderSink, TracingRender,
};
pub use crate::gesture::{GestureEvent, GestureTracker, ViewBounds};
