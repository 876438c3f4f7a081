use thiserror::Error;

/// The primary error type for the sunside crate.
#[derive(Error, Debug)]
pub enum SunsideError {
    #[error("geocoding failed: {0}")]
    Geocode(#[from] crate::services::GeocodeError),

    #[error("routing failed: {0}")]
    Routing(#[from] crate::services::RoutingError),

    #[error("route analysis failed: {0}")]
    Analyze(#[from] crate::exposure::AnalyzeError),

    #[error("solar position computation failed: {0}")]
    Solar(#[from] crate::solar::SolarComputationError),

    #[error("encoded route geometry is malformed: {0}")]
    Polyline(#[from] crate::route::PolylineFormatError),
}
