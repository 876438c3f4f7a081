use async_trait::async_trait;
use serde::Deserialize;

use super::error::RoutingError;
use super::geocode::USER_AGENT;
use crate::route::{Coordinate, DEFAULT_PRECISION, PolylineFormatError, Route, decode_polyline};

/// Capability contract for turning two coordinates into a driving route.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RoutingError>;
}

/// Route geometry as routing services deliver it: either the compact encoded
/// polyline, or an already-decoded GeoJSON line string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    Encoded(String),
    GeoJson {
        /// GeoJSON pair order is `[lon, lat]`.
        coordinates: Vec<[f64; 2]>,
    },
}

impl RouteGeometry {
    /// Produces coordinates in travel order, running encoded payloads
    /// through the polyline decoder.
    pub fn into_coordinates(self, precision: u32) -> Result<Vec<Coordinate>, PolylineFormatError> {
        match self {
            RouteGeometry::Encoded(encoded) => decode_polyline(&encoded, precision),
            RouteGeometry::GeoJson { coordinates } => Ok(coordinates
                .into_iter()
                .map(|[lon, lat]| Coordinate { lat, lon })
                .collect()),
        }
    }
}

const OSRM_URL: &str = "https://router.project-osrm.org";

/// Router backed by an OSRM `route` service.
pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: String,
    precision: u32,
}

impl OsrmRouter {
    /// Uses the public OSRM demo server.
    pub fn new() -> Result<Self, RoutingError> {
        Self::with_base_url(OSRM_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self, RoutingError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url,
            precision: DEFAULT_PRECISION,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
    geometry: RouteGeometry,
}

#[async_trait]
impl RoutingProvider for OsrmRouter {
    async fn route(&self, start: Coordinate, end: Coordinate) -> Result<Route, RoutingError> {
        // OSRM takes lon,lat pairs in the path.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, start.lon, start.lat, end.lon, end.lat
        );
        let response: OsrmResponse = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "polyline")])
            .send()
            .await?
            .json()
            .await?;

        if response.code != "Ok" {
            return Err(RoutingError::NotFound);
        }
        let Some(best) = response.routes.into_iter().next() else {
            return Err(RoutingError::NotFound);
        };

        let coordinates = best.geometry.into_coordinates(self.precision)?;
        log::debug!(
            "route has {} points over {:.0} m",
            coordinates.len(),
            best.distance
        );
        Ok(Route {
            coordinates,
            distance_meters: best.distance,
            duration_seconds: best.duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_encoded_geometry_parses() {
        let payload = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1523.4,
                "duration": 210.7,
                "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@"
            }]
        }"#;

        let response: OsrmResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.code, "Ok");

        let best = response.routes.into_iter().next().unwrap();
        let coordinates = best.geometry.into_coordinates(DEFAULT_PRECISION).unwrap();

        assert_eq!(coordinates.len(), 3);
        assert_eq!(coordinates[0], Coordinate::new(38.5, -120.2));
        assert_eq!(best.distance, 1523.4);
        assert_eq!(best.duration, 210.7);
    }

    #[test]
    fn test_response_with_geojson_geometry_parses() {
        // GeoJSON pairs are lon,lat and must be swapped on the way in.
        let payload = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 900.0,
                "duration": 80.0,
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[13.405, 52.52], [13.41, 52.53]]
                }
            }]
        }"#;

        let response: OsrmResponse = serde_json::from_str(payload).unwrap();
        let best = response.routes.into_iter().next().unwrap();
        let coordinates = best.geometry.into_coordinates(DEFAULT_PRECISION).unwrap();

        assert_eq!(
            coordinates,
            vec![Coordinate::new(52.52, 13.405), Coordinate::new(52.53, 13.41)]
        );
    }

    #[test]
    fn test_no_route_code_and_empty_routes() {
        let payload = r#"{"code": "NoRoute", "routes": []}"#;
        let response: OsrmResponse = serde_json::from_str(payload).unwrap();
        assert_ne!(response.code, "Ok");

        let payload = r#"{"code": "Ok"}"#;
        let response: OsrmResponse = serde_json::from_str(payload).unwrap();
        assert!(response.routes.is_empty());
    }

    #[test]
    fn test_malformed_encoded_geometry_surfaces_polyline_error() {
        let geometry = RouteGeometry::Encoded("_p~iF".to_string());
        let result = geometry.into_coordinates(DEFAULT_PRECISION);
        assert_eq!(result, Err(PolylineFormatError::UnexpectedEnd));
    }
}
