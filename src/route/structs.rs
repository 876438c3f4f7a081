use serde::{Deserialize, Serialize};

/// A WGS84 point: latitude in degrees north, longitude in degrees east.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The directed line between two consecutive route coordinates.
/// Travel direction is `from` → `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSegment {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl RouteSegment {
    /// Forward compass bearing of this segment in degrees, `[0, 360)`.
    pub fn bearing(&self) -> f64 {
        super::bearing::initial_bearing(self.from, self.to)
    }
}

/// A driving route as delivered by a routing service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Ordered points in travel order; a usable route has at least two.
    pub coordinates: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl Route {
    /// Consecutive coordinate pairs in travel order.
    pub fn segments(&self) -> impl Iterator<Item = RouteSegment> + '_ {
        self.coordinates.windows(2).map(|pair| RouteSegment {
            from: pair[0],
            to: pair[1],
        })
    }
}
