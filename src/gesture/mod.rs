//! Gesture input normalization.
//!
//! Converts raw continuous drag input into clamped 1-D offsets and the
//! discrete Begin/Update/End lifecycle. Everything here is free of side
//! effects beyond the tracker's own bookkeeping.

mod event;
mod tracker;

pub use event::GestureEvent;
pub use tracker::{GestureError, GestureTracker, ViewBounds};
