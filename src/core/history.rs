//! Interaction history tracking.
//!
//! Provides immutable tracking of state changes over one or more
//! pull-to-refresh cycles. The machine records every transition here,
//! which is what lets callers (and tests) check sequencing invariants
//! such as "Failure is always preceded by Committing".

use super::state::InteractionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// Changes are immutable values capturing the move from one state to
/// another, together with the drag offset at the moment the change
/// happened.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// The state being left.
    pub from: InteractionState,
    /// The state being entered.
    pub to: InteractionState,
    /// The stored drag offset when the change occurred.
    pub offset: f64,
    /// When the change occurred.
    pub at: DateTime<Utc>,
}

/// Ordered history of state changes.
///
/// The history is immutable: [`record`](InteractionHistory::record)
/// returns a new history with the change appended, leaving the original
/// untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use snapback::core::{InteractionHistory, InteractionState, StateChange};
///
/// let history = InteractionHistory::new();
/// let history = history.record(StateChange {
///     from: InteractionState::Idle,
///     to: InteractionState::Dragging,
///     offset: 0.0,
///     at: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path(),
///     vec![InteractionState::Idle, InteractionState::Dragging]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InteractionHistory {
    changes: Vec<StateChange>,
}

impl InteractionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// Pure with respect to `self`: the existing history is not mutated.
    pub fn record(&self, change: StateChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// The path of states traversed: the initial state, then the `to`
    /// state of each change in order. Empty if nothing was recorded.
    pub fn path(&self) -> Vec<InteractionState> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        for change in &self.changes {
            path.push(change.to);
        }
        path
    }

    /// All recorded changes in order.
    pub fn changes(&self) -> &[StateChange] {
        &self.changes
    }

    /// Whether the given state was ever entered or started from.
    pub fn passed_through(&self, state: InteractionState) -> bool {
        self.path().contains(&state)
    }

    /// Total duration from the first to the last recorded change.
    ///
    /// `None` if nothing was recorded yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
