//! Confirmation endpoint descriptors.
//!
//! The two logical endpoints of the transport boundary, described as data
//! rather than behavior. A requester implementation resolves a descriptor
//! into a concrete target; nothing here performs network I/O.

use super::outcome::{Outcome, OutcomeError};
use serde::{Deserialize, Serialize};
use url::Url;

const ENDPOINT_HOST: &str = "api.mocklets.com";

/// Descriptor for one of the two fixed confirmation endpoints.
///
/// # Example
///
/// ```rust
/// use snapback::effects::{Outcome, OutcomeEndpoint};
///
/// let endpoint = OutcomeEndpoint::for_outcome(Outcome::Success);
/// assert_eq!(endpoint.method(), "GET");
/// assert_eq!(
///     endpoint.url().unwrap().as_str(),
///     "https://api.mocklets.com/p68348/success_case"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeEndpoint {
    /// The "success confirmation" endpoint.
    SuccessCase,
    /// The "failure confirmation" endpoint.
    FailureCase,
}

impl OutcomeEndpoint {
    /// The endpoint confirming the given outcome branch.
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SuccessCase,
            Outcome::Failure => Self::FailureCase,
        }
    }

    /// URL scheme of the confirmation service.
    pub fn scheme(&self) -> &'static str {
        "https"
    }

    /// Path relative to the service host.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::SuccessCase => "p68348/success_case",
            Self::FailureCase => "p68348/failure_case",
        }
    }

    /// HTTP method of the confirmation call.
    pub fn method(&self) -> &'static str {
        "GET"
    }

    /// Build the full request target.
    ///
    /// An unbuildable target surfaces as
    /// [`OutcomeError::Construction`](super::OutcomeError::Construction).
    pub fn url(&self) -> Result<Url, OutcomeError> {
        let raw = format!(
            "{}://{}/{}",
            self.scheme(),
            ENDPOINT_HOST,
            self.relative_path()
        );
        Ok(Url::parse(&raw)?)
    }
}
