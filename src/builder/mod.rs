//! Builder API for machine construction.
//!
//! Assembles the pure configuration (commit zone, tolerance, offset
//! range) with the two capability boundaries (render sink, outcome
//! requester) and validates the combination before any machine exists.

pub mod error;

pub use error::BuildError;

use crate::core::{CommitZone, ThresholdEvaluator};
use crate::effects::{InteractionMachine, OutcomeRequester, RenderSink};
use std::sync::Arc;

/// Fluent builder for [`InteractionMachine`].
///
/// # Example
///
/// ```rust
/// use snapback::builder::InteractionBuilder;
/// use snapback::core::CommitZone;
/// use snapback::effects::{MockOutcomeRequester, TracingRender};
///
/// let machine = InteractionBuilder::new()
///     .zone(CommitZone::new(60.0, 80.0).unwrap())
///     .max_offset(100.0)
///     .render(TracingRender)
///     .requester(MockOutcomeRequester::new())
///     .build()
///     .unwrap();
///
/// assert!(!machine.is_final());
/// ```
pub struct InteractionBuilder {
    zone: Option<CommitZone>,
    tolerance: f64,
    max_offset: Option<f64>,
    render: Option<Box<dyn RenderSink>>,
    requester: Option<Arc<dyn OutcomeRequester>>,
}

impl InteractionBuilder {
    /// Create a new builder with the default tolerance.
    pub fn new() -> Self {
        Self {
            zone: None,
            tolerance: ThresholdEvaluator::DEFAULT_TOLERANCE,
            max_offset: None,
            render: None,
            requester: None,
        }
    }

    /// Set the commit zone (required).
    pub fn zone(mut self, zone: CommitZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Override the release tolerance (optional, default 10.0).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum drag offset (optional; defaults to the zone's
    /// upper edge).
    pub fn max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = Some(max_offset);
        self
    }

    /// Set the render sink (required).
    pub fn render<R>(mut self, render: R) -> Self
    where
        R: RenderSink + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Set the outcome requester (required).
    pub fn requester<Q>(mut self, requester: Q) -> Self
    where
        Q: OutcomeRequester + 'static,
    {
        self.requester = Some(Arc::new(requester));
        self
    }

    /// Build the machine.
    ///
    /// Validates that all required collaborators are present, that the
    /// tolerance and offset range are sane, and that the commit zone
    /// fits inside the drag range `[0, max_offset]`.
    pub fn build(self) -> Result<InteractionMachine, BuildError> {
        let zone = self.zone.ok_or(BuildError::MissingZone)?;
        let render = self.render.ok_or(BuildError::MissingRenderSink)?;
        let requester = self.requester.ok_or(BuildError::MissingRequester)?;

        if self.tolerance < 0.0 || self.tolerance.is_nan() {
            return Err(BuildError::InvalidTolerance(self.tolerance));
        }

        let max_offset = self.max_offset.unwrap_or_else(|| zone.upper());
        if max_offset <= 0.0 || max_offset.is_nan() {
            return Err(BuildError::InvalidMaxOffset(max_offset));
        }
        if zone.lower() < 0.0 || zone.upper() > max_offset {
            return Err(BuildError::ZoneOutOfRange {
                lower: zone.lower(),
                upper: zone.upper(),
                max_offset,
            });
        }

        Ok(InteractionMachine::new(
            zone,
            ThresholdEvaluator::new(self.tolerance),
            max_offset,
            render,
            requester,
        ))
    }
}

impl Default for InteractionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
