//! Shopper Profile
//!
//! Self-reported body information and wearing preferences for one request.
//! The engine never stores a profile; persistence belongs to the caller.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Shopper gender, selects the gender-specific estimation coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidChoice {
                field: "gender",
                value: s.to_string(),
                expected: "male, female",
            }),
        }
    }
}

/// Self-reported abdomen shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbdomenShape {
    Flat,
    Medium,
    Bulging,
}

impl AbdomenShape {
    /// Waist width adjustment in cm
    pub fn waist_adjustment(&self) -> f64 {
        match self {
            AbdomenShape::Flat => -2.0,
            AbdomenShape::Medium => 0.0,
            AbdomenShape::Bulging => 3.0,
        }
    }
}

impl FromStr for AbdomenShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(AbdomenShape::Flat),
            "medium" => Ok(AbdomenShape::Medium),
            "bulging" => Ok(AbdomenShape::Bulging),
            _ => Err(ValidationError::InvalidChoice {
                field: "abdomenShape",
                value: s.to_string(),
                expected: "flat, medium, bulging",
            }),
        }
    }
}

/// Self-reported hip shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HipShape {
    Straight,
    Average,
    Wide,
}

impl HipShape {
    /// Hip width adjustment in cm
    pub fn hip_adjustment(&self) -> f64 {
        match self {
            HipShape::Straight => -2.0,
            HipShape::Average => 0.0,
            HipShape::Wide => 3.0,
        }
    }
}

impl FromStr for HipShape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(HipShape::Straight),
            "average" => Ok(HipShape::Average),
            "wide" => Ok(HipShape::Wide),
            _ => Err(ValidationError::InvalidChoice {
                field: "hipShape",
                value: s.to_string(),
                expected: "straight, average, wide",
            }),
        }
    }
}

/// How closely the shopper likes garments to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearingPreference {
    VeryFitted,
    Fitted,
    Normal,
    Loose,
    VeryLoose,
}

impl WearingPreference {
    /// Form-fitting preferences target negative ease on fitted garments
    pub fn is_form_fitting(&self) -> bool {
        matches!(self, WearingPreference::VeryFitted | WearingPreference::Fitted)
    }

    /// Phrase used in "for a ... fit"
    pub fn display_text(&self) -> &'static str {
        match self {
            WearingPreference::VeryFitted => "very fitted",
            WearingPreference::Fitted => "fitted",
            WearingPreference::Normal => "regular",
            WearingPreference::Loose => "relaxed",
            WearingPreference::VeryLoose => "very relaxed",
        }
    }
}

impl FromStr for WearingPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "very_fitted" => Ok(WearingPreference::VeryFitted),
            "fitted" => Ok(WearingPreference::Fitted),
            "normal" => Ok(WearingPreference::Normal),
            "loose" => Ok(WearingPreference::Loose),
            "very_loose" => Ok(WearingPreference::VeryLoose),
            _ => Err(ValidationError::InvalidChoice {
                field: "wearingPreference",
                value: s.to_string(),
                expected: "very_fitted, fitted, normal, loose, very_loose",
            }),
        }
    }
}

/// Garment fabric, determines how much negative ease a fitted garment tolerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FabricType {
    Cotton,
    CottonBlend,
    JerseyKnit,
    HighlyElastic,
}

impl FabricType {
    /// Multiplier applied to form-fitting ease
    pub fn stretch_multiplier(&self) -> f64 {
        match self {
            FabricType::Cotton => 1.0,
            FabricType::CottonBlend => 0.95,
            FabricType::JerseyKnit => 0.90,
            FabricType::HighlyElastic => 0.85,
        }
    }

    /// Anything other than plain cotton gives a little
    pub fn is_stretch(&self) -> bool {
        !matches!(self, FabricType::Cotton)
    }
}

impl FromStr for FabricType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cotton" => Ok(FabricType::Cotton),
            "cotton_blend" => Ok(FabricType::CottonBlend),
            "jersey_knit" => Ok(FabricType::JerseyKnit),
            "highly_elastic" => Ok(FabricType::HighlyElastic),
            _ => Err(ValidationError::InvalidChoice {
                field: "fabricType",
                value: s.to_string(),
                expected: "cotton, cotton_blend, jersey_knit, highly_elastic",
            }),
        }
    }
}

/// Validated shopper profile.
///
/// Heights are in cm, weights in kg. The optional self-measurements only signal
/// that the shopper measured themselves; estimates are always computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: f64,
    pub abdomen_shape: AbdomenShape,
    pub hip_shape: HipShape,
    pub wearing_preference: WearingPreference,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub shoulder: Option<f64>,
    pub fabric_type: Option<FabricType>,
    pub vendor: Option<String>,
}

impl UserProfile {
    /// Profile with only the required fields set
    pub fn new(
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        age: f64,
        abdomen_shape: AbdomenShape,
        hip_shape: HipShape,
        wearing_preference: WearingPreference,
    ) -> Self {
        Self {
            gender,
            height_cm,
            weight_kg,
            age,
            abdomen_shape,
            hip_shape,
            wearing_preference,
            chest: None,
            waist: None,
            hip: None,
            shoulder: None,
            fabric_type: None,
            vendor: None,
        }
    }

    pub fn has_optional_measurement(&self) -> bool {
        self.chest.is_some() || self.waist.is_some() || self.hip.is_some() || self.shoulder.is_some()
    }
}
