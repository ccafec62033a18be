//! Ease Lookup Tables
//!
//! Fixed ease amounts (cm of flat-lay width) by wearing preference and garment
//! category, plus the per-body-type target adjustments.

use crate::chart::GarmentCategory;
use crate::estimator::BodyType;
use crate::profile::WearingPreference;

/// One ease value per wearing preference
#[derive(Debug, Clone, Copy)]
pub struct EaseTable {
    pub very_fitted: f64,
    pub fitted: f64,
    pub normal: f64,
    pub loose: f64,
    pub very_loose: f64,
}

impl EaseTable {
    pub fn get(&self, preference: WearingPreference) -> f64 {
        match preference {
            WearingPreference::VeryFitted => self.very_fitted,
            WearingPreference::Fitted => self.fitted,
            WearingPreference::Normal => self.normal,
            WearingPreference::Loose => self.loose,
            WearingPreference::VeryLoose => self.very_loose,
        }
    }
}

// ============================================================================
// EASE TABLES
// ============================================================================

/// Oversized cuts always add room on top of the body
pub static OVERSIZED_EASE: EaseTable = EaseTable {
    very_fitted: 8.0,
    fitted: 10.0,
    normal: 12.0,
    loose: 14.0,
    very_loose: 16.0,
};

/// Negative ease for form-fitting bottoms (only the fitted entries are used)
pub static FORM_FITTING_EASE_BOTTOMS: EaseTable = EaseTable {
    very_fitted: 4.0,
    fitted: 6.0,
    normal: 8.0,
    loose: 10.0,
    very_loose: 13.0,
};

/// Negative ease for other form-fitting garments (only the fitted entries are used)
pub static FORM_FITTING_EASE_OTHER: EaseTable = EaseTable {
    very_fitted: 6.0,
    fitted: 8.0,
    normal: 10.0,
    loose: 12.0,
    very_loose: 15.0,
};

/// Positive ease for relaxed preferences on regular cuts
pub static RELAXED_EASE: EaseTable = EaseTable {
    very_fitted: 0.0,
    fitted: 0.0,
    normal: 4.0,
    loose: 8.0,
    very_loose: 12.0,
};

/// Extra room for layering under outerwear
pub const OUTERWEAR_EXTRA_EASE: f64 = 3.0;

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

pub fn oversized_ease(preference: WearingPreference) -> f64 {
    OVERSIZED_EASE.get(preference)
}

pub fn form_fitting_ease(preference: WearingPreference, category: GarmentCategory) -> f64 {
    match category {
        GarmentCategory::Bottoms => FORM_FITTING_EASE_BOTTOMS.get(preference),
        _ => FORM_FITTING_EASE_OTHER.get(preference),
    }
}

pub fn relaxed_ease(preference: WearingPreference) -> f64 {
    RELAXED_EASE.get(preference)
}

/// Target adjustment (cm) for a body type wearing a garment category
pub fn body_type_adjustment(body_type: BodyType, category: GarmentCategory) -> f64 {
    match (body_type, category) {
        (BodyType::Athletic, GarmentCategory::Tops | GarmentCategory::Outerwear) => 2.0,
        (BodyType::Pear, GarmentCategory::Bottoms) => 2.0,
        (BodyType::Pear, GarmentCategory::Tops) => -1.0,
        (BodyType::Apple, GarmentCategory::Tops | GarmentCategory::Dresses) => 1.0,
        _ => 0.0,
    }
}
