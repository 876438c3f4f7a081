use serde::{Deserialize, Serialize};

use super::error::SolarComputationError;

/// Where the sun stands for one timestamp and coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSample {
    /// Compass direction of the sun, clockwise from true north, `[0, 360)`.
    pub azimuth_deg: f64,
    /// Angle above the horizon in degrees; zero or negative means the sun is
    /// down.
    pub altitude_deg: f64,
}

impl SolarSample {
    /// The sun contributes exposure only while above the horizon.
    pub fn is_daylight(&self) -> bool {
        self.altitude_deg > 0.0
    }

    /// Providers must deliver finite angles; anything else poisons the
    /// aggregate and aborts the analysis.
    pub(crate) fn ensure_finite(&self) -> Result<(), SolarComputationError> {
        if self.azimuth_deg.is_finite() && self.altitude_deg.is_finite() {
            Ok(())
        } else {
            Err(SolarComputationError::NonFinite {
                azimuth_deg: self.azimuth_deg,
                altitude_deg: self.altitude_deg,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daylight_threshold_is_exclusive() {
        let horizon = SolarSample {
            azimuth_deg: 90.0,
            altitude_deg: 0.0,
        };
        assert!(!horizon.is_daylight());

        let up = SolarSample {
            azimuth_deg: 90.0,
            altitude_deg: 0.1,
        };
        assert!(up.is_daylight());
    }

    #[test]
    fn test_non_finite_samples_are_rejected() {
        let sample = SolarSample {
            azimuth_deg: f64::NAN,
            altitude_deg: 10.0,
        };
        assert!(sample.ensure_finite().is_err());

        let sample = SolarSample {
            azimuth_deg: 180.0,
            altitude_deg: f64::INFINITY,
        };
        assert!(sample.ensure_finite().is_err());
    }
}
