use serde::{Deserialize, Serialize};

use crate::solar::SolarSample;

/// Vehicle side the sun strikes for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Side {
    Left,
    Right,
    /// Sun below the horizon, or dead ahead/behind.
    None,
}

/// How much one daylight segment contributes to its side's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum WeightingMode {
    /// `sin(altitude) · cos(angle off the side-window normal)`: a low sun
    /// square on a side window outweighs the same sun dead ahead or behind.
    Weighted,
    /// Every daylight segment counts as 1, regardless of geometry.
    SegmentCount,
}

/// Classification of one route segment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ExposureSample {
    pub side: Side,
    /// In `[0, 1]`; always 0 when `side` is `None`.
    pub weight: f64,
}

impl ExposureSample {
    const NONE: Self = Self {
        side: Side::None,
        weight: 0.0,
    };
}

/// Combines a segment's travel bearing with the sun's position into a side
/// classification and weight.
///
/// The relative angle is the sun's direction measured clockwise from the
/// direction of travel: `(0, 180)` puts the sun on the right, `(180, 360)`
/// on the left. Exactly 0 or 180 (dead ahead/behind) deterministically
/// classifies as `None`.
pub fn classify(bearing_deg: f64, sun: &SolarSample, mode: WeightingMode) -> ExposureSample {
    if !sun.is_daylight() {
        return ExposureSample::NONE;
    }

    let relative = (sun.azimuth_deg - bearing_deg).rem_euclid(360.0);
    if relative == 0.0 || relative == 180.0 {
        return ExposureSample::NONE;
    }

    let side = if relative < 180.0 {
        Side::Right
    } else {
        Side::Left
    };

    let weight = match mode {
        WeightingMode::SegmentCount => 1.0,
        WeightingMode::Weighted => {
            // Fold to [0, 180], then measure how far the sun sits from the
            // side-window normal at 90°. Perpendicular sun scores highest.
            let folded = relative.min(360.0 - relative);
            let off_normal = (folded - 90.0).abs();
            sun.altitude_deg.to_radians().sin() * off_normal.to_radians().cos()
        }
    };

    ExposureSample { side, weight }
}
