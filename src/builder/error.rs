//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building an interaction machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Commit zone not specified. Call .zone(zone) before .build()")]
    MissingZone,

    #[error("Render sink not specified. Call .render(sink) before .build()")]
    MissingRenderSink,

    #[error("Outcome requester not specified. Call .requester(requester) before .build()")]
    MissingRequester,

    #[error("Tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("Maximum offset must be positive, got {0}")]
    InvalidMaxOffset(f64),

    #[error("Commit zone [{lower}, {upper}] does not fit within [0, {max_offset}]")]
    ZoneOutOfRange {
        lower: f64,
        upper: f64,
        max_offset: f64,
    },
}
