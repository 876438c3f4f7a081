use serde::{Deserialize, Serialize};

use crate::exposure::ExposureSummary;
use crate::generation::Generation;
use crate::route::{Coordinate, Route};
use crate::services::GeocodeCandidate;

/// Consolidated outcome of one trip analysis.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripReport {
    pub start: GeocodeCandidate,
    pub end: GeocodeCandidate,
    pub route: Route,
    pub summary: ExposureSummary,
    /// Whole kilometers, as shown to the traveler.
    pub distance_km: f64,
    /// Hours rounded to one decimal, as shown to the traveler.
    pub duration_hours: f64,
    /// Drop this report if a newer request has started since.
    pub generation: Generation,
}

impl TripReport {
    /// Everything the map layer needs for a redraw, replaced wholesale after
    /// each successful analysis. The engine itself holds no marker or layer
    /// state, and a failed analysis produces no state to apply.
    pub fn visualization(&self) -> RouteVisualizationState {
        RouteVisualizationState {
            polyline: self.route.coordinates.clone(),
            start_marker: self.start.coordinate,
            end_marker: self.end.coordinate,
            bounds: bounds_of(&self.route.coordinates),
            summary: self.summary,
        }
    }
}

/// Snapshot of what the map should display for one analyzed route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVisualizationState {
    pub polyline: Vec<Coordinate>,
    pub start_marker: Coordinate,
    pub end_marker: Coordinate,
    /// South-west and north-east corners enclosing the route, for fitting
    /// the viewport. `None` for an empty polyline.
    pub bounds: Option<(Coordinate, Coordinate)>,
    pub summary: ExposureSummary,
}

fn bounds_of(coordinates: &[Coordinate]) -> Option<(Coordinate, Coordinate)> {
    let first = coordinates.first()?;
    let mut south_west = *first;
    let mut north_east = *first;

    for point in &coordinates[1..] {
        south_west.lat = south_west.lat.min(point.lat);
        south_west.lon = south_west.lon.min(point.lon);
        north_east.lat = north_east.lat.max(point.lat);
        north_east.lon = north_east.lon.max(point.lon);
    }

    Some((south_west, north_east))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_enclose_every_point() {
        let coordinates = vec![
            Coordinate::new(52.5, 13.4),
            Coordinate::new(52.7, 13.1),
            Coordinate::new(52.3, 13.9),
        ];

        let (south_west, north_east) = bounds_of(&coordinates).unwrap();

        assert_eq!(south_west, Coordinate::new(52.3, 13.1));
        assert_eq!(north_east, Coordinate::new(52.7, 13.9));
    }

    #[test]
    fn test_bounds_of_empty_polyline() {
        assert_eq!(bounds_of(&[]), None);
    }
}
