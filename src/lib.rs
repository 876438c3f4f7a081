//! # Sunside
//!
//! Decide which side of a vehicle gets less direct sunlight over a drive.
//!
//! Given a start, a destination and a departure time, this crate resolves a
//! driving route and judges which side of the vehicle the sun will strike
//! (left, right, or neither), so a traveler can pick the shaded seat.
//!
//! ## Key Features
//!
//! - **Exposure engine**: classifies every route segment against the sun's
//!   azimuth and altitude, then aggregates a left/right/none breakdown and a
//!   preferred (shaded) side.
//! - **Polyline decoding**: decodes the compact encoded route geometry that
//!   routing services return.
//! - **Solar geometry**: ships an NREL-SPA-backed position provider; any
//!   other source can be plugged in behind the same trait.
//! - **Service adapters**: forward geocoding (Nominatim) and routing (OSRM)
//!   clients, both swappable for tests or self-hosted instances.
//! - **Last-request-wins**: every report carries a generation token so a UI
//!   can drop completions that lost the race.
//!
//! ## Usage
//!
//! Create a [`TripPlanner`] and call [`TripPlanner::plan_trip`] with two
//! place names and a departure timestamp.
//!
//! ```rust,no_run
//! use sunside::TripPlanner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sunside::SunsideError> {
//!     let planner = TripPlanner::builder().build()?;
//!     let report = planner
//!         .plan_trip("Hamburg", "Munich", "2026-08-07T08:30:00+02:00")
//!         .await?;
//!
//!     println!("Preferred side: {:?}", report.summary.preferred_side);
//!     println!(
//!         "Left {:.0}% / right {:.0}% over {} km",
//!         report.summary.left_percent, report.summary.right_percent, report.distance_km
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod exposure;
pub mod generation;
pub mod route;
pub mod services;
pub mod solar;
pub mod structs;
pub mod trip_planner;

pub use error::SunsideError;
pub use exposure::{
    ExposureSample, ExposureSummary, PreferredSide, RouteExposureAnalyzer, Side, WeightingMode,
};
pub use generation::{Generation, GenerationCounter};
pub use route::{Coordinate, Route, RouteSegment};
pub use solar::{SolarPositionProvider, SolarSample, SpaSolarProvider};
pub use structs::{RouteVisualizationState, TripReport};
pub use trip_planner::TripPlanner;
