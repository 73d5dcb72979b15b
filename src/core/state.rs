//! Interaction states for the pull-to-refresh cycle.
//!
//! The state enum is a plain value type with pure inspection methods;
//! all mutation goes through the machine that owns it.

use serde::{Deserialize, Serialize};

/// The phase a pull-to-refresh interaction is currently in.
///
/// Exactly one state is active at a time and it is owned exclusively by
/// [`InteractionMachine`](crate::effects::InteractionMachine). A machine is
/// created in `Idle`; `Success` and `Failure` are terminal for the cycle
/// until an explicit reset.
///
/// # Example
///
/// ```rust
/// use snapback::core::InteractionState;
///
/// let state = InteractionState::Committing;
/// assert_eq!(state.name(), "Committing");
/// assert!(!state.is_final());
/// assert!(InteractionState::Failure.is_final());
/// assert!(InteractionState::Failure.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InteractionState {
    /// No gesture in progress; the indicator rests at its start position.
    Idle,
    /// A drag is being tracked; the stored offset follows the gesture.
    Dragging,
    /// The release decision was made and the confirmation call is pending.
    Committing,
    /// The confirmation resolved in favor of the refresh.
    Success,
    /// The confirmation resolved against the refresh.
    Failure,
}

impl InteractionState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging => "Dragging",
            Self::Committing => "Committing",
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }

    /// Check if this state is terminal for the current interaction cycle.
    ///
    /// Terminal states accept no further gesture events; only
    /// [`reset`](crate::effects::InteractionMachine::reset) leaves them.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// Check if this state represents a failed interaction cycle.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure)
    }
}
