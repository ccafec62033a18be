//! Fit Target Calculator
//!
//! Turns estimated body widths into the flat-lay garment width the shopper
//! should be wearing, given their preference, the garment cut and fabric, their
//! body type and the brand.

use super::brand_profiles::BrandFitProfiles;
use super::ease_tables::{
    body_type_adjustment, form_fitting_ease, oversized_ease, relaxed_ease, OUTERWEAR_EXTRA_EASE,
};
use crate::chart::GarmentCategory;
use crate::estimator::EstimatedBodyMeasurements;
use crate::profile::{FabricType, WearingPreference};

/// Everything the calculator needs for one product
#[derive(Debug, Clone, Copy)]
pub struct FitInputs<'a> {
    pub body: &'a EstimatedBodyMeasurements,
    pub preference: WearingPreference,
    pub category: GarmentCategory,
    pub is_oversized: bool,
    pub fabric_type: Option<FabricType>,
    pub vendor: Option<&'a str>,
}

/// Target garment width with the intermediate values behind it
#[derive(Debug, Clone, PartialEq)]
pub struct FitTarget {
    /// Body width the category is fitted on
    pub primary_width: f64,
    /// Signed ease applied to the primary width (includes outerwear extra)
    pub ease: f64,
    /// Nonzero when the body type shifted the target
    pub body_type_adjustment: f64,
    pub brand_note: Option<String>,
    /// Final flat-lay width to match against the chart
    pub target_width: f64,
}

/// Body width a category is fitted on
pub fn primary_body_width(body: &EstimatedBodyMeasurements, category: GarmentCategory) -> f64 {
    match category {
        GarmentCategory::Tops | GarmentCategory::Outerwear => body.chest_width,
        GarmentCategory::Bottoms => body.waist_width.max(body.hip_width),
        GarmentCategory::Dresses => body.chest_width.max(body.hip_width),
    }
}

/// Signed ease for the preference, cut and fabric
fn preference_ease(inputs: &FitInputs<'_>) -> f64 {
    if inputs.is_oversized {
        return oversized_ease(inputs.preference);
    }

    if inputs.preference.is_form_fitting() {
        let stretch = inputs
            .fabric_type
            .map_or(1.0, |fabric| fabric.stretch_multiplier());
        -(form_fitting_ease(inputs.preference, inputs.category) * stretch)
    } else {
        relaxed_ease(inputs.preference)
    }
}

/// Calculate the target garment width
pub fn calculate_fit_target(inputs: &FitInputs<'_>, brands: &dyn BrandFitProfiles) -> FitTarget {
    let primary_width = primary_body_width(inputs.body, inputs.category);

    let mut ease = preference_ease(inputs);
    if inputs.category == GarmentCategory::Outerwear {
        ease += OUTERWEAR_EXTRA_EASE;
    }

    let body_adjustment = body_type_adjustment(inputs.body.body_type, inputs.category);
    let width = primary_width + ease + body_adjustment;

    let brand = brands.adjust(inputs.vendor, width, inputs.category);

    tracing::debug!(
        "Fit target: primary={} ease={:+.1} body_type={:+.1} target={:.1}",
        primary_width,
        ease,
        body_adjustment,
        brand.width
    );

    FitTarget {
        primary_width,
        ease,
        body_type_adjustment: body_adjustment,
        brand_note: brand.note,
        target_width: brand.width,
    }
}
