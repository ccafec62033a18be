//! Recommendation Confidence
//!
//! Starts from 0.5, adds a bonus for how close the best size sits to the target
//! and for extra information the shopper gave, then scales by the confidence of
//! the body estimate itself.

use crate::profile::{FabricType, WearingPreference};
use crate::utils::round_to;

const BASE_CONFIDENCE: f64 = 0.5;
const FABRIC_KNOWN_BONUS: f64 = 0.05;
const OPTIONAL_MEASUREMENT_BONUS: f64 = 0.05;
const STRETCH_FORGIVENESS_BONUS: f64 = 0.10;

/// (max diff cm, bonus), checked in order
static DIFF_BONUSES: &[(f64, f64)] = &[
    (1.0, 0.45),
    (2.0, 0.40),
    (3.0, 0.35),
    (4.0, 0.30),
    (6.0, 0.20),
    (8.0, 0.10),
];

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceInputs {
    /// Distance of the best size from the target, None for a fallback label
    pub measurement_diff: Option<f64>,
    pub fabric_type: Option<FabricType>,
    pub has_optional_measurement: bool,
    pub is_oversized: bool,
    pub preference: WearingPreference,
    /// Confidence of the body estimate (0.5-1.0)
    pub body_confidence: f64,
}

/// Bonus for how close the best size is to the target
pub fn diff_bonus(diff: f64) -> f64 {
    DIFF_BONUSES
        .iter()
        .find(|(max_diff, _)| diff <= *max_diff)
        .map_or(0.0, |(_, bonus)| *bonus)
}

/// Final confidence in [0.50, 1.00], two decimals
pub fn calculate_confidence(inputs: &ConfidenceInputs) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if let Some(diff) = inputs.measurement_diff {
        confidence += diff_bonus(diff);
    }

    if inputs.fabric_type.is_some() {
        confidence += FABRIC_KNOWN_BONUS;
    }

    if inputs.has_optional_measurement {
        confidence += OPTIONAL_MEASUREMENT_BONUS;
    }

    // Stretch fabric forgives a close fit on a regular cut
    let stretch_fabric = inputs.fabric_type.is_some_and(|fabric| fabric.is_stretch());
    if !inputs.is_oversized && stretch_fabric && inputs.preference.is_form_fitting() {
        confidence += STRETCH_FORGIVENESS_BONUS;
    }

    confidence *= inputs.body_confidence;

    round_to(confidence.clamp(0.5, 1.0), 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(diff: Option<f64>) -> ConfidenceInputs {
        ConfidenceInputs {
            measurement_diff: diff,
            fabric_type: None,
            has_optional_measurement: false,
            is_oversized: false,
            preference: WearingPreference::Normal,
            body_confidence: 1.0,
        }
    }

    #[test]
    fn test_diff_bands() {
        assert_eq!(diff_bonus(0.0), 0.45);
        assert_eq!(diff_bonus(1.0), 0.45);
        assert_eq!(diff_bonus(1.5), 0.40);
        assert_eq!(diff_bonus(4.0), 0.30);
        assert_eq!(diff_bonus(5.5), 0.20);
        assert_eq!(diff_bonus(8.0), 0.10);
        assert_eq!(diff_bonus(8.1), 0.0);
    }

    #[test]
    fn test_scaled_by_body_confidence() {
        let mut c = inputs(Some(2.0));
        c.body_confidence = 0.8;
        // (0.5 + 0.40) × 0.8
        assert_eq!(calculate_confidence(&c), 0.72);
    }

    #[test]
    fn test_bonuses_stack_and_clamp() {
        let mut c = inputs(Some(0.5));
        c.fabric_type = Some(FabricType::JerseyKnit);
        c.has_optional_measurement = true;
        c.preference = WearingPreference::Fitted;
        // 0.5 + 0.45 + 0.05 + 0.05 + 0.10 = 1.15
        assert_eq!(calculate_confidence(&c), 1.0);
    }

    #[test]
    fn test_stretch_bonus_conditions() {
        let mut c = inputs(Some(5.0));
        c.fabric_type = Some(FabricType::Cotton);
        c.preference = WearingPreference::VeryFitted;
        // cotton: 0.5 + 0.2 + 0.05
        assert_eq!(calculate_confidence(&c), 0.75);

        c.fabric_type = Some(FabricType::HighlyElastic);
        assert_eq!(calculate_confidence(&c), 0.85);

        c.is_oversized = true;
        assert_eq!(calculate_confidence(&c), 0.75);
    }

    #[test]
    fn test_floor_at_half() {
        let mut c = inputs(None);
        c.body_confidence = 0.65;
        assert_eq!(calculate_confidence(&c), 0.5);
    }
}
