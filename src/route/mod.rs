//! Route geometry: coordinates, segments and the encoded-polyline decoder.
mod bearing;
mod error;
mod polyline;
mod structs;

pub use bearing::initial_bearing;
pub use error::PolylineFormatError;
pub use polyline::{DEFAULT_PRECISION, decode_polyline};
pub use structs::{Coordinate, Route, RouteSegment};
