use serde::{Deserialize, Serialize};

use super::classifier::{ExposureSample, Side};

/// Seating recommendation: the side expected to stay in the shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PreferredSide {
    Left,
    Right,
    NoPreference,
}

/// Route-level exposure breakdown. Percentages sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureSummary {
    pub left_percent: f64,
    pub right_percent: f64,
    pub none_percent: f64,
    pub preferred_side: PreferredSide,
}

/// Weight ties below this are reported as no preference.
const TIE_EPSILON: f64 = 1e-9;

/// Reduces the per-segment samples of one route into summary percentages and
/// a preferred side.
///
/// Only left/right weight enters the percentage denominator; `None` samples
/// keep a route without any daylight exposure at `0 / 0 / 100` instead of
/// dividing by zero. The preferred side is the one receiving less cumulative
/// sun, i.e. the shaded side.
pub fn aggregate(samples: &[ExposureSample]) -> ExposureSummary {
    let mut left = 0.0;
    let mut right = 0.0;

    for sample in samples {
        match sample.side {
            Side::Left => left += sample.weight,
            Side::Right => right += sample.weight,
            Side::None => {}
        }
    }

    let total = left + right;
    if total <= 0.0 {
        return ExposureSummary {
            left_percent: 0.0,
            right_percent: 0.0,
            none_percent: 100.0,
            preferred_side: PreferredSide::NoPreference,
        };
    }

    let left_percent = 100.0 * left / total;
    let right_percent = 100.0 * right / total;
    let none_percent = 100.0 - left_percent - right_percent;

    let preferred_side = if (left - right).abs() <= TIE_EPSILON {
        PreferredSide::NoPreference
    } else if left < right {
        PreferredSide::Left
    } else {
        PreferredSide::Right
    };

    ExposureSummary {
        left_percent,
        right_percent,
        none_percent,
        preferred_side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(side: Side, weight: f64) -> ExposureSample {
        ExposureSample { side, weight }
    }

    #[test]
    fn test_shaded_side_is_preferred() {
        let samples = [
            sample(Side::Left, 0.2),
            sample(Side::Right, 0.7),
            sample(Side::Right, 0.5),
        ];

        let summary = aggregate(&samples);

        // --- Assertions ---
        assert_eq!(summary.preferred_side, PreferredSide::Left);
        assert!(summary.left_percent < summary.right_percent);
        assert!((summary.left_percent - 100.0 * 0.2 / 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_close_to_one_hundred() {
        let samples = [
            sample(Side::Left, 0.31),
            sample(Side::Right, 0.12),
            sample(Side::None, 0.0),
            sample(Side::Left, 0.05),
            sample(Side::Right, 0.44),
        ];

        let summary = aggregate(&samples);
        let total = summary.left_percent + summary.right_percent + summary.none_percent;
        assert!((total - 100.0).abs() < 0.01, "total {total}");
    }

    #[test]
    fn test_all_night_route_registers_fully_unexposed() {
        let samples = [sample(Side::None, 0.0); 4];

        let summary = aggregate(&samples);

        assert_eq!(summary.left_percent, 0.0);
        assert_eq!(summary.right_percent, 0.0);
        assert_eq!(summary.none_percent, 100.0);
        assert_eq!(summary.preferred_side, PreferredSide::NoPreference);
    }

    #[test]
    fn test_symmetric_exposure_yields_no_preference() {
        let weight = 45f64.to_radians().sin();
        let samples = [sample(Side::Left, weight), sample(Side::Right, weight)];

        let summary = aggregate(&samples);

        assert!((summary.left_percent - 50.0).abs() < 1e-9);
        assert!((summary.right_percent - 50.0).abs() < 1e-9);
        assert_eq!(summary.preferred_side, PreferredSide::NoPreference);
    }

    #[test]
    fn test_sunnier_left_prefers_right() {
        let samples = [sample(Side::Left, 0.9), sample(Side::Right, 0.1)];
        assert_eq!(aggregate(&samples).preferred_side, PreferredSide::Right);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let forward = [
            sample(Side::Left, 0.3),
            sample(Side::None, 0.0),
            sample(Side::Right, 0.6),
        ];
        let mut reversed = forward;
        reversed.reverse();

        assert_eq!(aggregate(&forward), aggregate(&reversed));
    }
}
