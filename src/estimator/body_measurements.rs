//! Body Measurement Estimator
//!
//! Estimates front (flat-lay) chest, waist, hip and shoulder widths from height,
//! weight, age and the shopper's self-reported shapes. The coefficients are a
//! fixed heuristic, not an anthropometric model.

use serde::{Deserialize, Serialize};

use super::body_type::{detect_body_type, BodyType};
use crate::profile::{Gender, UserProfile};

mod coefficients {
    pub const MALE_CHEST_PER_CM: f64 = 0.26;
    pub const FEMALE_CHEST_PER_CM: f64 = 0.25;
    pub const MALE_CHEST_PER_BMI: f64 = 0.5;
    pub const FEMALE_CHEST_PER_BMI: f64 = 0.4;
    pub const MALE_BASELINE_BMI: f64 = 23.0;
    pub const FEMALE_BASELINE_BMI: f64 = 22.0;

    pub const MALE_WAIST_OFFSET: f64 = 2.0;
    pub const FEMALE_WAIST_OFFSET: f64 = 4.0;
    pub const MALE_HIP_OFFSET: f64 = 1.0;
    pub const FEMALE_HIP_OFFSET: f64 = 5.0;

    pub const MALE_SHOULDER_PER_CM: f64 = 0.24;
    pub const FEMALE_SHOULDER_PER_CM: f64 = 0.22;

    pub const CHEST_RANGE: (f64, f64) = (35.0, 60.0);
    pub const SHOULDER_RANGE: (f64, f64) = (35.0, 55.0);
}

/// Typical BMI band; outside it the estimate is less trustworthy
const TYPICAL_BMI: (f64, f64) = (18.5, 30.0);

/// Typical adult age band
const TYPICAL_AGE: (f64, f64) = (18.0, 70.0);

const BASE_CONFIDENCE: f64 = 0.8;

/// Estimated flat-lay body widths (cm) for one shopper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatedBodyMeasurements {
    pub chest_width: f64,
    pub waist_width: f64,
    pub hip_width: f64,
    pub shoulder_width: f64,
    /// 0.5-1.0, lowered for atypical BMI or age
    pub confidence: f64,
    pub body_type: BodyType,
}

/// Body mass index from height (cm) and weight (kg)
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Estimate body widths from a validated profile
pub fn estimate_body_measurements(profile: &UserProfile) -> EstimatedBodyMeasurements {
    use coefficients::*;

    let is_male = profile.gender == Gender::Male;
    let bmi = calculate_bmi(profile.height_cm, profile.weight_kg);

    // Chest: height share plus BMI deviation from the gender baseline
    let (chest_per_cm, chest_per_bmi, baseline_bmi) = if is_male {
        (MALE_CHEST_PER_CM, MALE_CHEST_PER_BMI, MALE_BASELINE_BMI)
    } else {
        (FEMALE_CHEST_PER_CM, FEMALE_CHEST_PER_BMI, FEMALE_BASELINE_BMI)
    };
    let mut chest = profile.height_cm * chest_per_cm + (bmi - baseline_bmi) * chest_per_bmi;

    if profile.age < 25.0 {
        chest -= 0.5;
    } else if profile.age > 50.0 {
        chest += 1.0;
    }
    let chest = chest.clamp(CHEST_RANGE.0, CHEST_RANGE.1);

    let waist_offset = if is_male { MALE_WAIST_OFFSET } else { FEMALE_WAIST_OFFSET };
    let waist = chest - waist_offset + profile.abdomen_shape.waist_adjustment();

    let hip_offset = if is_male { MALE_HIP_OFFSET } else { FEMALE_HIP_OFFSET };
    let hip = waist + hip_offset + profile.hip_shape.hip_adjustment();

    let shoulder_per_cm = if is_male { MALE_SHOULDER_PER_CM } else { FEMALE_SHOULDER_PER_CM };
    let mut shoulder = profile.height_cm * shoulder_per_cm;
    if profile.age > 40.0 {
        shoulder += 0.5;
    }
    let shoulder = shoulder.clamp(SHOULDER_RANGE.0, SHOULDER_RANGE.1);

    let mut confidence = BASE_CONFIDENCE;
    if bmi < TYPICAL_BMI.0 || bmi > TYPICAL_BMI.1 {
        confidence -= 0.1;
    }
    if profile.age < TYPICAL_AGE.0 || profile.age > TYPICAL_AGE.1 {
        confidence -= 0.05;
    }
    let confidence = confidence.clamp(0.5, 1.0);

    let chest_width = chest.round();
    let waist_width = waist.round();
    let hip_width = hip.round();
    let shoulder_width = shoulder.round();
    let body_type = detect_body_type(profile.gender, chest_width, waist_width, hip_width);

    tracing::debug!(
        "Estimated body: bmi={:.1} chest={} waist={} hip={} shoulder={} type={} confidence={:.2}",
        bmi,
        chest_width,
        waist_width,
        hip_width,
        shoulder_width,
        body_type.display_text(),
        confidence
    );

    EstimatedBodyMeasurements {
        chest_width,
        waist_width,
        hip_width,
        shoulder_width,
        confidence,
        body_type,
    }
}
