//! Fit Target
//!
//! - `ease_tables.rs` - Ease by preference/category, body-type adjustments
//! - `brand_profiles.rs` - Injectable vendor fit bias (trait + table)
//! - `target.rs` - Target garment width calculation

pub mod ease_tables;
pub mod brand_profiles;
pub mod target;

pub use brand_profiles::{
    BrandAdjustment, BrandFitProfiles, BrandProfile, BrandProfileTable, NoBrandProfiles,
};
pub use target::{calculate_fit_target, primary_body_width, FitInputs, FitTarget};
