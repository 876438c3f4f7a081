use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarComputationError {
    #[error("solar position is not finite (azimuth {azimuth_deg}, altitude {altitude_deg})")]
    NonFinite { azimuth_deg: f64, altitude_deg: f64 },

    #[error("solar position algorithm rejected the input: {0}")]
    Rejected(String),
}
