use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use solar_positioning::spa;
use solar_positioning::types::RefractionCorrection;

use super::error::SolarComputationError;
use super::structs::SolarSample;
use crate::route::Coordinate;

/// Capability contract for solar geometry lookups.
///
/// Implementations must return azimuth measured clockwise from true north in
/// `[0, 360)` and altitude in degrees above (positive) or below (negative)
/// the horizon. A provider whose upstream uses a different zero-reference is
/// responsible for normalizing before returning.
#[async_trait]
pub trait SolarPositionProvider: Send + Sync {
    async fn solar_position(
        &self,
        at: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<SolarSample, SolarComputationError>;
}

#[async_trait]
impl<P: SolarPositionProvider + ?Sized> SolarPositionProvider for Arc<P> {
    async fn solar_position(
        &self,
        at: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<SolarSample, SolarComputationError> {
        (**self).solar_position(at, coordinate).await
    }
}

/// ΔT between terrestrial and universal time, seconds. Accurate enough for
/// the 2020s.
const DELTA_T_SECONDS: f64 = 69.0;
/// Standard atmosphere, feeding the refraction correction.
const PRESSURE_MILLIBARS: f64 = 1013.25;
const TEMPERATURE_CELSIUS: f64 = 15.0;

/// Production provider backed by the NREL SPA implementation.
///
/// SPA already reports azimuth clockwise from true north, so no offset is
/// applied here.
#[derive(Debug, Clone)]
pub struct SpaSolarProvider {
    elevation_meters: f64,
}

impl SpaSolarProvider {
    pub fn new() -> Self {
        Self {
            elevation_meters: 0.0,
        }
    }

    /// Observer elevation above sea level, used by the refraction model.
    pub fn with_elevation(elevation_meters: f64) -> Self {
        Self { elevation_meters }
    }

    fn sample(
        &self,
        at: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<SolarSample, SolarComputationError> {
        let refraction = RefractionCorrection::new(PRESSURE_MILLIBARS, TEMPERATURE_CELSIUS)
            .map_err(|error| SolarComputationError::Rejected(error.to_string()))?;
        let position = spa::solar_position(
            at,
            coordinate.lat,
            coordinate.lon,
            self.elevation_meters,
            DELTA_T_SECONDS,
            Some(refraction),
        )
        .map_err(|error| SolarComputationError::Rejected(error.to_string()))?;

        Ok(SolarSample {
            azimuth_deg: position.azimuth(),
            altitude_deg: position.elevation_angle(),
        })
    }
}

impl Default for SpaSolarProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SolarPositionProvider for SpaSolarProvider {
    async fn solar_position(
        &self,
        at: DateTime<Utc>,
        coordinate: Coordinate,
    ) -> Result<SolarSample, SolarComputationError> {
        self.sample(at, coordinate)
    }
}
