//! The asynchronous confirmation capability.
//!
//! During `Committing` the machine issues exactly one confirmation call
//! through an [`OutcomeRequester`]. Single attempt: no retry, no timeout,
//! no cancellation. The result is carried back explicitly as a `Result`
//! so the machine can resolve the cycle instead of collapsing every
//! completion to "done".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which confirmation branch the machine is requesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The release landed in the commit zone.
    Success,
    /// The release missed the commit zone.
    Failure,
}

impl Outcome {
    /// Get the outcome's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

/// The decoded confirmation payload, shaped `{ "success": bool }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub success: bool,
}

/// Errors a confirmation call can surface to the machine.
#[derive(Debug, Error)]
pub enum OutcomeError {
    /// The collaborator could not be reached.
    #[error("transport failure while confirming the outcome: {0}")]
    Transport(String),

    /// The payload arrived but was not a valid confirmation.
    #[error("confirmation payload could not be decoded")]
    Decode(#[from] serde_json::Error),

    /// The request target could not be built.
    #[error("confirmation request could not be constructed")]
    Construction(#[from] url::ParseError),
}

/// Performs the asynchronous success/failure confirmation call.
///
/// The two logical operations of the boundary are
/// `confirm(Outcome::Success)` and `confirm(Outcome::Failure)`; which
/// endpoint each maps to is described by
/// [`OutcomeEndpoint`](crate::effects::OutcomeEndpoint). Implementations
/// make exactly one attempt per call.
#[async_trait]
pub trait OutcomeRequester: Send + Sync {
    async fn confirm(&self, outcome: Outcome) -> Result<Confirmation, OutcomeError>;
}
