//! Clients for the external collaborators: forward geocoding and routing.
mod error;
mod geocode;
mod routing;

pub use error::{GeocodeError, RoutingError};
pub use geocode::{GeocodeCandidate, GeocodeProvider, MergedGeocoder, NominatimGeocoder};
pub use routing::{OsrmRouter, RouteGeometry, RoutingProvider};
