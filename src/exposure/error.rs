use thiserror::Error;

use crate::solar::SolarComputationError;

/// Failure of a single analysis request. Every variant is terminal: the
/// engine never degrades to a partial aggregate, since a silently skipped
/// segment would bias the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error("route has {0} coordinate(s), need at least 2")]
    InsufficientRouteData(usize),

    #[error("departure time {input:?} is not a recognizable instant")]
    InvalidTime { input: String },

    #[error("solar position lookup failed: {0}")]
    Solar(#[from] SolarComputationError),
}
