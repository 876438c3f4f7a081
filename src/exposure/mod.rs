//! The sun exposure computation engine: per-segment classification and
//! route-level aggregation.
mod aggregator;
mod analyzer;
mod classifier;
mod error;

pub use aggregator::{ExposureSummary, PreferredSide, aggregate};
pub use analyzer::{RouteExposureAnalyzer, parse_departure};
pub use classifier::{ExposureSample, Side, WeightingMode, classify};
pub use error::AnalyzeError;
