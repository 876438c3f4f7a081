use chrono::{DateTime, NaiveDateTime, Utc};
use futures::future::try_join_all;

use super::aggregator::{ExposureSummary, aggregate};
use super::classifier::{WeightingMode, classify};
use super::error::AnalyzeError;
use crate::route::Route;
use crate::solar::SolarPositionProvider;

/// Turns a route geometry plus a departure instant into a per-side exposure
/// summary.
///
/// The single departure timestamp applies to the whole route (no
/// time-of-arrival simulation along it), and the sun is sampled at each
/// segment's starting coordinate. The analyzer owns no state beyond its
/// provider and configuration; every call builds and discards its own
/// segment sequence.
pub struct RouteExposureAnalyzer<P> {
    solar: P,
    weighting: WeightingMode,
}

impl<P: SolarPositionProvider> RouteExposureAnalyzer<P> {
    pub fn new(solar: P) -> Self {
        Self {
            solar,
            weighting: WeightingMode::Weighted,
        }
    }

    /// Switches between physically weighted exposure and plain segment
    /// counting. One analysis always uses exactly one mode.
    pub fn with_weighting(mut self, weighting: WeightingMode) -> Self {
        self.weighting = weighting;
        self
    }

    /// Analyzes `route` for a departure given as a timestamp string.
    ///
    /// # Errors
    ///
    /// * [`AnalyzeError::InvalidTime`] when the timestamp cannot be parsed.
    /// * [`AnalyzeError::InsufficientRouteData`] for routes with fewer than
    ///   two coordinates.
    /// * [`AnalyzeError::Solar`] when any segment's solar lookup fails or
    ///   yields a non-finite sample; the whole analysis is aborted.
    pub async fn analyze(
        &self,
        route: &Route,
        departure: &str,
    ) -> Result<ExposureSummary, AnalyzeError> {
        let departure = parse_departure(departure)?;
        self.analyze_at(route, departure).await
    }

    /// Analyzes `route` for an already-parsed departure instant.
    pub async fn analyze_at(
        &self,
        route: &Route,
        departure: DateTime<Utc>,
    ) -> Result<ExposureSummary, AnalyzeError> {
        if route.coordinates.len() < 2 {
            return Err(AnalyzeError::InsufficientRouteData(route.coordinates.len()));
        }

        // Each lookup depends only on the fixed departure instant and its
        // own segment start, so issue them all at once.
        let lookups = route
            .segments()
            .map(|segment| self.solar.solar_position(departure, segment.from));
        let sun_samples = try_join_all(lookups).await?;

        let mut samples = Vec::with_capacity(sun_samples.len());
        for (segment, sun) in route.segments().zip(&sun_samples) {
            sun.ensure_finite()?;
            samples.push(classify(segment.bearing(), sun, self.weighting));
        }

        let summary = aggregate(&samples);
        log::debug!(
            "analyzed {} segments: left {:.1}%, right {:.1}%, none {:.1}%",
            samples.len(),
            summary.left_percent,
            summary.right_percent,
            summary.none_percent
        );
        Ok(summary)
    }
}

/// Parses a departure instant: RFC 3339 first, then the naive
/// `YYYY-MM-DDTHH:MM[:SS]` shape a datetime form field produces, taken as
/// UTC.
pub fn parse_departure(input: &str) -> Result<DateTime<Utc>, AnalyzeError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(AnalyzeError::InvalidTime {
        input: input.to_string(),
    })
}
