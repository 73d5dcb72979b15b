//! Mock confirmation collaborator.
//!
//! Stands in for the out-of-process confirmation service: resolves the
//! endpoint descriptor, waits a configurable latency on the tokio clock,
//! and decodes a canned JSON body. Demos and tests drive the machine
//! through it; a simulated outage exercises the transport error path.

use super::endpoint::OutcomeEndpoint;
use super::outcome::{Confirmation, Outcome, OutcomeError, OutcomeRequester};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Mock [`OutcomeRequester`] with configurable latency, bodies, and
/// outages.
///
/// Defaults answer the success endpoint with `{"success": true}` and the
/// failure endpoint with `{"success": false}`, immediately.
///
/// # Example
///
/// ```rust
/// use snapback::effects::MockOutcomeRequester;
/// use std::time::Duration;
///
/// let requester = MockOutcomeRequester::new().with_latency(Duration::from_millis(150));
/// ```
#[derive(Clone, Debug)]
pub struct MockOutcomeRequester {
    latency: Duration,
    success_body: String,
    failure_body: String,
    outage: Option<String>,
}

impl MockOutcomeRequester {
    /// Create a well-behaved mock with zero latency.
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            success_body: r#"{"success": true}"#.to_string(),
            failure_body: r#"{"success": false}"#.to_string(),
            outage: None,
        }
    }

    /// Delay each confirmation by the given latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the canned body returned for the given outcome branch.
    pub fn with_body(mut self, outcome: Outcome, body: impl Into<String>) -> Self {
        match outcome {
            Outcome::Success => self.success_body = body.into(),
            Outcome::Failure => self.failure_body = body.into(),
        }
        self
    }

    /// Fail every confirmation with a transport error.
    pub fn with_outage(mut self, message: impl Into<String>) -> Self {
        self.outage = Some(message.into());
        self
    }
}

impl Default for MockOutcomeRequester {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutcomeRequester for MockOutcomeRequester {
    async fn confirm(&self, outcome: Outcome) -> Result<Confirmation, OutcomeError> {
        let endpoint = OutcomeEndpoint::for_outcome(outcome);
        let target = endpoint.url()?;
        debug!(%target, method = endpoint.method(), "mock confirmation request");

        sleep(self.latency).await;

        if let Some(message) = &self.outage {
            return Err(OutcomeError::Transport(message.clone()));
        }

        let body = match outcome {
            Outcome::Success => &self.success_body,
            Outcome::Failure => &self.failure_body,
        };
        let confirmation: Confirmation = serde_json::from_str(body)?;
        Ok(confirmation)
    }
}
