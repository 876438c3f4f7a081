use std::sync::Arc;

use bon::bon;
use chrono::{DateTime, Utc};

use crate::error::SunsideError;
use crate::exposure::{RouteExposureAnalyzer, WeightingMode, parse_departure};
use crate::generation::{Generation, GenerationCounter};
use crate::route::Coordinate;
use crate::services::{
    GeocodeCandidate, GeocodeError, GeocodeProvider, NominatimGeocoder, OsrmRouter,
    RoutingProvider,
};
use crate::solar::{SolarPositionProvider, SpaSolarProvider};
use crate::structs::TripReport;

/// The main entry point for planning a sun-aware trip.
///
/// Holds the configured service clients and the exposure engine. It is
/// designed to be created once and reused across requests; each request
/// builds and discards its own route and summary.
///
/// Use the builder pattern to construct an instance:
/// ```rust,no_run
/// # use sunside::{SunsideError, TripPlanner};
/// # fn main() -> Result<(), SunsideError> {
/// let planner = TripPlanner::builder().build()?;
/// # Ok(())
/// # }
/// ```
pub struct TripPlanner {
    geocoder: Arc<dyn GeocodeProvider>,
    router: Arc<dyn RoutingProvider>,
    analyzer: RouteExposureAnalyzer<Arc<dyn SolarPositionProvider>>,
    generations: GenerationCounter,
}

#[bon]
impl TripPlanner {
    /// Constructs a `TripPlanner` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `geocoder: Option<Arc<dyn GeocodeProvider>>` - Forward geocoder; defaults to the public Nominatim instance.
    /// * `router: Option<Arc<dyn RoutingProvider>>` - Routing service; defaults to the public OSRM demo server.
    /// * `solar: Option<Arc<dyn SolarPositionProvider>>` - Solar geometry source; defaults to the built-in SPA implementation.
    /// * `weighting: WeightingMode` - (Default: `Weighted`) How a daylight segment contributes to its side's total.
    ///
    /// # Errors
    ///
    /// Fails when a default HTTP client cannot be constructed for one of the
    /// service adapters.
    #[builder]
    pub fn new(
        geocoder: Option<Arc<dyn GeocodeProvider>>,
        router: Option<Arc<dyn RoutingProvider>>,
        solar: Option<Arc<dyn SolarPositionProvider>>,
        #[builder(default = WeightingMode::Weighted)] weighting: WeightingMode,
    ) -> Result<Self, SunsideError> {
        let geocoder: Arc<dyn GeocodeProvider> = match geocoder {
            Some(geocoder) => geocoder,
            None => Arc::new(NominatimGeocoder::new()?),
        };
        let router: Arc<dyn RoutingProvider> = match router {
            Some(router) => router,
            None => Arc::new(OsrmRouter::new()?),
        };
        let solar: Arc<dyn SolarPositionProvider> = match solar {
            Some(solar) => solar,
            None => Arc::new(SpaSolarProvider::new()),
        };

        Ok(Self {
            geocoder,
            router,
            analyzer: RouteExposureAnalyzer::new(solar).with_weighting(weighting),
            generations: GenerationCounter::new(),
        })
    }

    /// Resolves two free-text places, routes between them, and analyzes the
    /// route's sun exposure for the given departure.
    ///
    /// The start and end lookups are independent and run concurrently;
    /// routing waits on both. The returned report carries a generation
    /// token: callers that fire overlapping requests should apply only the
    /// report for which [`TripPlanner::is_current`] still holds.
    ///
    /// # Errors
    ///
    /// Any failing step aborts the request and leaves previously displayed
    /// results untouched:
    /// * [`SunsideError::Analyze`] for an unparseable departure or a route
    ///   with fewer than two points.
    /// * [`SunsideError::Geocode`] when either place resolves to nothing.
    /// * [`SunsideError::Routing`] when no drivable route exists or its
    ///   geometry cannot be decoded.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use sunside::{SunsideError, TripPlanner};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), SunsideError> {
    /// let planner = TripPlanner::builder().build()?;
    /// let report = planner
    ///     .plan_trip("Hamburg", "Munich", "2026-08-07T08:30:00+02:00")
    ///     .await?;
    ///
    /// println!("sit on the {:?} side", report.summary.preferred_side);
    /// println!("{} km, {} h", report.distance_km, report.duration_hours);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn plan_trip(
        &self,
        start: &str,
        end: &str,
        departure: &str,
    ) -> Result<TripReport, SunsideError> {
        let generation = self.generations.begin();
        let departure = parse_departure(departure)?;

        let (start_candidates, end_candidates) =
            tokio::join!(self.geocoder.geocode(start), self.geocoder.geocode(end));
        let start_place = best_candidate(start_candidates?, start)?;
        let end_place = best_candidate(end_candidates?, end)?;

        self.finish_plan(start_place, end_place, departure, generation)
            .await
    }

    /// Routes and analyzes between coordinates the caller already has,
    /// skipping geocoding.
    pub async fn plan_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        departure: &str,
    ) -> Result<TripReport, SunsideError> {
        let generation = self.generations.begin();
        let departure = parse_departure(departure)?;

        self.finish_plan(
            pinned_candidate(start),
            pinned_candidate(end),
            departure,
            generation,
        )
        .await
    }

    /// True while `generation` belongs to the most recent request on this
    /// planner. Completions that lost the race should be dropped, never
    /// applied.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generations.is_current(generation)
    }

    async fn finish_plan(
        &self,
        start_place: GeocodeCandidate,
        end_place: GeocodeCandidate,
        departure: DateTime<Utc>,
        generation: Generation,
    ) -> Result<TripReport, SunsideError> {
        let route = self
            .router
            .route(start_place.coordinate, end_place.coordinate)
            .await?;
        let summary = self.analyzer.analyze_at(&route, departure).await?;

        log::info!(
            "{} -> {}: preferred side {:?} (left {:.0}%, right {:.0}%)",
            start_place.label,
            end_place.label,
            summary.preferred_side,
            summary.left_percent,
            summary.right_percent
        );

        Ok(TripReport {
            distance_km: (route.distance_meters / 1000.0).round(),
            duration_hours: (route.duration_seconds / 3600.0 * 10.0).round() / 10.0,
            start: start_place,
            end: end_place,
            route,
            summary,
            generation,
        })
    }
}

fn best_candidate(
    candidates: Vec<GeocodeCandidate>,
    query: &str,
) -> Result<GeocodeCandidate, GeocodeError> {
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound {
            query: query.to_string(),
        })
}

/// Stand-in candidate for callers that supply raw coordinates.
fn pinned_candidate(coordinate: Coordinate) -> GeocodeCandidate {
    GeocodeCandidate {
        label: format!("{:.5}, {:.5}", coordinate.lat, coordinate.lon),
        region: None,
        coordinate,
    }
}
