use thiserror::Error;

use crate::route::PolylineFormatError;

#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The provider produced no candidates for the query.
    #[error("no geocoding results for {query:?}")]
    NotFound { query: String },

    #[error("geocoding request failed")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum RoutingError {
    /// No drivable route between the two points.
    #[error("no route found between the requested locations")]
    NotFound,

    #[error("routing request failed")]
    Transport(#[from] reqwest::Error),

    #[error("route geometry could not be decoded: {0}")]
    Polyline(#[from] PolylineFormatError),
}
