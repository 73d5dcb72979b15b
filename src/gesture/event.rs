//! Gesture lifecycle events.

use serde::{Deserialize, Serialize};

/// A discrete step in the drag gesture lifecycle.
///
/// Events are ephemeral: the input layer produces them (usually through a
/// [`GestureTracker`](crate::gesture::GestureTracker)) and the machine
/// consumes them immediately. `Update` carries the normalized, already
/// range-constrained offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// The drag started.
    Begin,
    /// The drag moved; the payload is the current normalized offset.
    Update(f64),
    /// The drag was released.
    End,
}
