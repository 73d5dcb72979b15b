//! Commit zone geometry and the release decision predicate.
//!
//! The evaluator is a pure boolean function over an offset and a zone.
//! It encapsulates the "close enough to count" rule as a deterministic
//! predicate with no side effects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`CommitZone`].
#[derive(Debug, Error, PartialEq)]
pub enum ZoneError {
    #[error("commit zone lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
}

/// The offset range within which releasing the drag counts as a refresh.
///
/// Invariant: `lower <= upper`, enforced at construction.
///
/// # Example
///
/// ```rust
/// use snapback::core::CommitZone;
///
/// let zone = CommitZone::new(60.0, 80.0).unwrap();
/// assert_eq!(zone.center(), 70.0);
///
/// assert!(CommitZone::new(80.0, 60.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitZone {
    lower: f64,
    upper: f64,
}

impl CommitZone {
    /// Create a commit zone, rejecting inverted bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ZoneError> {
        if lower > upper {
            return Err(ZoneError::InvertedBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The lower edge of the zone.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper edge of the zone.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The target offset the indicator snaps to on a successful release.
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Pure predicate deciding whether a released drag reached the commit zone.
///
/// `evaluate` returns true iff the offset lies within `tolerance` of the
/// zone center, inclusive at exactly `tolerance` distance.
///
/// # Example
///
/// ```rust
/// use snapback::core::{CommitZone, ThresholdEvaluator};
///
/// let zone = CommitZone::new(60.0, 80.0).unwrap();
/// let evaluator = ThresholdEvaluator::default();
///
/// assert!(evaluator.evaluate(65.0, &zone));
/// assert!(evaluator.evaluate(80.0, &zone)); // exactly at tolerance
/// assert!(!evaluator.evaluate(80.5, &zone));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEvaluator {
    tolerance: f64,
}

impl ThresholdEvaluator {
    /// Default distance from the zone center that still counts as a hit.
    pub const DEFAULT_TOLERANCE: f64 = 10.0;

    /// Create an evaluator with a custom tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// The configured tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Decide whether `offset` is in or close enough to the commit zone.
    ///
    /// Pure and deterministic: same inputs, same answer, no side effects.
    pub fn evaluate(&self, offset: f64, zone: &CommitZone) -> bool {
        (offset - zone.center()).abs() <= self.tolerance
    }
}

impl Default for ThresholdEvaluator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_rejects_inverted_bounds() {
        let err = CommitZone::new(90.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            ZoneError::InvertedBounds {
                lower: 90.0,
                upper: 10.0
            }
        );
    }

    #[test]
    fn zone_allows_degenerate_point() {
        let zone = CommitZone::new(70.0, 70.0).unwrap();
        assert_eq!(zone.center(), 70.0);
        assert_eq!(zone.lower(), zone.upper());
    }

    #[test]
    fn evaluate_accepts_center() {
        let zone = CommitZone::new(60.0, 80.0).unwrap();
        let evaluator = ThresholdEvaluator::default();
        assert!(evaluator.evaluate(zone.center(), &zone));
    }

    #[test]
    fn evaluate_boundary_is_inclusive() {
        let zone = CommitZone::new(60.0, 80.0).unwrap();
        let evaluator = ThresholdEvaluator::default();

        assert!(evaluator.evaluate(60.0, &zone));
        assert!(evaluator.evaluate(80.0, &zone));
        assert!(!evaluator.evaluate(59.999, &zone));
        assert!(!evaluator.evaluate(80.001, &zone));
    }

    #[test]
    fn evaluate_is_deterministic() {
        let zone = CommitZone::new(0.0, 100.0).unwrap();
        let evaluator = ThresholdEvaluator::new(5.0);

        let first = evaluator.evaluate(47.0, &zone);
        let second = evaluator.evaluate(47.0, &zone);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_tolerance_narrows_the_band() {
        let zone = CommitZone::new(60.0, 80.0).unwrap();
        let strict = ThresholdEvaluator::new(1.0);

        assert!(strict.evaluate(70.5, &zone));
        assert!(!strict.evaluate(72.0, &zone));
    }

    #[test]
    fn negative_tolerance_never_matches() {
        let zone = CommitZone::new(60.0, 80.0).unwrap();
        let evaluator = ThresholdEvaluator::new(-1.0);
        assert!(!evaluator.evaluate(zone.center(), &zone));
    }

    #[test]
    fn zone_serializes_correctly() {
        let zone = CommitZone::new(60.0, 80.0).unwrap();
        let json = serde_json::to_string(&zone).unwrap();
        let deserialized: CommitZone = serde_json::from_str(&json).unwrap();
        assert_eq!(zone, deserialized);
    }
}
