//! Drag tracking: raw pointer deltas to normalized offsets.
//!
//! The tracker owns no UI element. It converts the continuous delta
//! stream of a pan gesture into clamped 1-D offsets and the discrete
//! Begin/Update/End lifecycle the machine consumes.

use super::event::GestureEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing [`ViewBounds`].
#[derive(Debug, Error, PartialEq)]
pub enum GestureError {
    #[error("view lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
}

/// The vertical range the indicator is allowed to occupy.
///
/// Movement that would leave the range is clamped silently; this matches
/// the "ignore movement that would exceed container bounds" policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    lower: f64,
    upper: f64,
}

impl ViewBounds {
    /// Create view bounds, rejecting an inverted range.
    pub fn new(lower: f64, upper: f64) -> Result<Self, GestureError> {
        if lower > upper {
            return Err(GestureError::InvertedBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The lowest offset the indicator may occupy.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The highest offset the indicator may occupy.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Clamp an offset into the range.
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.lower, self.upper)
    }
}

/// Converts raw drag deltas into a normalized, range-constrained offset.
///
/// `begin` resets the internal reference to the current rendered
/// position; each `update` receives the delta from the gesture start and
/// emits `clamp(reference + delta)`; `end` emits the terminal event while
/// the last known offset stays readable via [`position`](Self::position).
///
/// # Example
///
/// ```rust
/// use snapback::gesture::{GestureEvent, GestureTracker, ViewBounds};
///
/// let bounds = ViewBounds::new(0.0, 100.0).unwrap();
/// let mut tracker = GestureTracker::new(bounds);
///
/// tracker.begin();
/// assert_eq!(tracker.update(65.0), GestureEvent::Update(65.0));
/// assert_eq!(tracker.update(180.0), GestureEvent::Update(100.0));
/// tracker.end();
/// assert_eq!(tracker.position(), 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct GestureTracker {
    bounds: ViewBounds,
    reference: f64,
    position: f64,
}

impl GestureTracker {
    /// Create a tracker resting at the lower view bound.
    pub fn new(bounds: ViewBounds) -> Self {
        Self {
            bounds,
            reference: bounds.lower(),
            position: bounds.lower(),
        }
    }

    /// Start a drag: the reference offset becomes the current rendered
    /// position, so deltas are applied relative to where the indicator
    /// actually is.
    pub fn begin(&mut self) -> GestureEvent {
        self.reference = self.position;
        GestureEvent::Begin
    }

    /// Apply the delta from the gesture start and emit the clamped
    /// offset. Out-of-range deltas are clamped silently.
    pub fn update(&mut self, delta_from_start: f64) -> GestureEvent {
        self.position = self.bounds.clamp(self.reference + delta_from_start);
        GestureEvent::Update(self.position)
    }

    /// Release the drag. The last known offset remains readable via
    /// [`position`](Self::position).
    pub fn end(&self) -> GestureEvent {
        GestureEvent::End
    }

    /// The last emitted (or synced) offset.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// The bounds this tracker clamps into.
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    /// Report a rendered reposition (a snap) back to the tracker so the
    /// next `begin` starts from the on-screen position.
    pub fn sync(&mut self, position: f64) {
        self.position = self.bounds.clamp(position);
    }
}
