//! Body Type Detection
//!
//! Coarse shape classification from the chest/waist/hip ratios of the rounded
//! flat-lay estimates.

use serde::{Deserialize, Serialize};

use crate::profile::Gender;

/// Coarse body shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Athletic,
    Pear,
    Apple,
    Rectangle,
    Hourglass,
}

impl BodyType {
    pub fn display_text(&self) -> &'static str {
        match self {
            BodyType::Athletic => "athletic",
            BodyType::Pear => "pear",
            BodyType::Apple => "apple",
            BodyType::Rectangle => "rectangle",
            BodyType::Hourglass => "hourglass",
        }
    }
}

const MALE_ATHLETIC_CHEST_WAIST: f64 = 1.12;
const MALE_APPLE_WAIST_CHEST: f64 = 0.95;
const FEMALE_DEFINED_WAIST: f64 = 1.25;
const FEMALE_BALANCED_TOLERANCE: f64 = 0.1;
const FEMALE_PEAR_HIP_WAIST: f64 = 1.15;
const FEMALE_APPLE_WAIST_CHEST: f64 = 0.9;

/// Classify body shape from flat-lay widths (cm)
pub fn detect_body_type(gender: Gender, chest: f64, waist: f64, hip: f64) -> BodyType {
    let chest_to_waist = chest / waist;
    let hip_to_waist = hip / waist;
    let chest_to_hip = chest / hip;

    match gender {
        Gender::Male => {
            if chest_to_waist >= MALE_ATHLETIC_CHEST_WAIST {
                BodyType::Athletic
            } else if waist >= MALE_APPLE_WAIST_CHEST * chest {
                BodyType::Apple
            } else {
                BodyType::Rectangle
            }
        }
        Gender::Female => {
            let waist_definition = chest_to_waist.min(hip_to_waist);
            if waist_definition >= FEMALE_DEFINED_WAIST {
                if (chest_to_hip - 1.0).abs() <= FEMALE_BALANCED_TOLERANCE {
                    BodyType::Hourglass
                } else if hip_to_waist > chest_to_waist {
                    BodyType::Pear
                } else {
                    BodyType::Athletic
                }
            } else if hip_to_waist > FEMALE_PEAR_HIP_WAIST {
                BodyType::Pear
            } else if waist >= FEMALE_APPLE_WAIST_CHEST * chest {
                BodyType::Apple
            } else {
                BodyType::Rectangle
            }
        }
    }
}
