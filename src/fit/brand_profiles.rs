//! Brand Fit Profiles
//!
//! Some vendors cut consistently small or large. A brand profile shifts the fit
//! target by a fixed amount and carries a note for the shopper. The calculator
//! only sees the `BrandFitProfiles` trait, so profiles can come from the
//! built-in table, a JSON file, or anything else the host provides.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::chart::GarmentCategory;

/// Target width after brand adjustment, with the note to show the shopper
#[derive(Debug, Clone, PartialEq)]
pub struct BrandAdjustment {
    pub width: f64,
    pub note: Option<String>,
}

impl BrandAdjustment {
    pub fn unchanged(width: f64) -> Self {
        Self { width, note: None }
    }
}

/// Lookup from vendor name to fit bias
pub trait BrandFitProfiles: Send + Sync {
    /// Adjust a target width for the given vendor. Unknown or absent vendors
    /// must pass the width through unchanged.
    fn adjust(&self, vendor: Option<&str>, width: f64, category: GarmentCategory) -> BrandAdjustment;
}

/// Profile source that knows no brands
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBrandProfiles;

impl BrandFitProfiles for NoBrandProfiles {
    fn adjust(&self, _vendor: Option<&str>, width: f64, _category: GarmentCategory) -> BrandAdjustment {
        BrandAdjustment::unchanged(width)
    }
}

/// Fit bias for one vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Vendor name as it appears on products
    pub name: String,
    /// Added to the target width (positive = aim roomier)
    pub adjustment_cm: f64,
    pub note: String,
    /// Restrict the adjustment to these categories (all when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<GarmentCategory>>,
}

impl BrandProfile {
    fn applies_to(&self, category: GarmentCategory) -> bool {
        self.categories
            .as_ref()
            .map_or(true, |categories| categories.contains(&category))
    }
}

/// Table-backed brand profiles keyed by normalized vendor name
#[derive(Debug, Clone, Default)]
pub struct BrandProfileTable {
    profiles: FxHashMap<String, BrandProfile>,
}

fn normalize_vendor(name: &str) -> String {
    name.trim().to_lowercase()
}

impl BrandProfileTable {
    pub fn from_profiles(profiles: impl IntoIterator<Item = BrandProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (normalize_vendor(&profile.name), profile))
            .collect();
        Self { profiles }
    }

    /// Built-in vendor table
    pub fn builtin() -> Self {
        Self::from_profiles(vec![
            BrandProfile {
                name: "Atelier Mono".to_string(),
                adjustment_cm: 2.0,
                note: "Atelier Mono runs small, so we aimed 2cm roomier.".to_string(),
                categories: None,
            },
            BrandProfile {
                name: "Loomcraft".to_string(),
                adjustment_cm: -2.0,
                note: "Loomcraft runs large, so we aimed 2cm closer.".to_string(),
                categories: None,
            },
            BrandProfile {
                name: "Northbound Supply".to_string(),
                adjustment_cm: 1.5,
                note: "Northbound Supply outerwear is cut slim, so we allowed a little extra room.".to_string(),
                categories: Some(vec![GarmentCategory::Outerwear]),
            },
        ])
    }

    /// Load profiles from a JSON array file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read brand profiles file: {:?}", path))?;

        let profiles: Vec<BrandProfile> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse brand profiles JSON")?;

        if let Some(bad) = profiles.iter().find(|p| !p.adjustment_cm.is_finite()) {
            anyhow::bail!("Brand profile '{}' has a non-finite adjustment", bad.name);
        }

        Ok(Self::from_profiles(profiles))
    }

    pub fn get(&self, vendor: &str) -> Option<&BrandProfile> {
        self.profiles.get(&normalize_vendor(vendor))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl BrandFitProfiles for BrandProfileTable {
    fn adjust(&self, vendor: Option<&str>, width: f64, category: GarmentCategory) -> BrandAdjustment {
        match vendor.and_then(|v| self.get(v)) {
            Some(profile) if profile.applies_to(category) => BrandAdjustment {
                width: width + profile.adjustment_cm,
                note: Some(profile.note.clone()),
            },
            _ => BrandAdjustment::unchanged(width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vendor_passes_through() {
        let table = BrandProfileTable::builtin();
        assert_eq!(table.adjust(None, 50.0, GarmentCategory::Tops), BrandAdjustment::unchanged(50.0));
        assert_eq!(
            table.adjust(Some("Someone Else"), 50.0, GarmentCategory::Tops),
            BrandAdjustment::unchanged(50.0)
        );
    }

    #[test]
    fn test_vendor_lookup_is_case_insensitive() {
        let table = BrandProfileTable::builtin();
        let adjusted = table.adjust(Some("  atelier MONO "), 50.0, GarmentCategory::Tops);
        assert_eq!(adjusted.width, 52.0);
        assert!(adjusted.note.unwrap().contains("runs small"));
    }

    #[test]
    fn test_category_restriction() {
        let table = BrandProfileTable::builtin();
        let coat = table.adjust(Some("Northbound Supply"), 50.0, GarmentCategory::Outerwear);
        assert_eq!(coat.width, 51.5);
        let tee = table.adjust(Some("Northbound Supply"), 50.0, GarmentCategory::Tops);
        assert_eq!(tee, BrandAdjustment::unchanged(50.0));
    }

    #[test]
    fn test_profiles_from_json() {
        let json = r#"[
            {"name": "Tidewear", "adjustment_cm": -1.0, "note": "Tidewear runs generous."},
            {"name": "Pinecut", "adjustment_cm": 3.0, "note": "Pinecut bottoms run tight.", "categories": ["bottoms"]}
        ]"#;
        let profiles: Vec<BrandProfile> = serde_json::from_str(json).unwrap();
        let table = BrandProfileTable::from_profiles(profiles);
        assert_eq!(table.len(), 2);
        assert_eq!(table.adjust(Some("pinecut"), 40.0, GarmentCategory::Bottoms).width, 43.0);
        assert_eq!(table.adjust(Some("pinecut"), 40.0, GarmentCategory::Tops).width, 40.0);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = BrandProfileTable::load(Path::new("/nonexistent/brands.json")).unwrap_err();
        assert!(err.to_string().contains("brands.json"));
    }

    #[test]
    fn test_no_brand_profiles() {
        let adjusted = NoBrandProfiles.adjust(Some("Atelier Mono"), 48.0, GarmentCategory::Tops);
        assert_eq!(adjusted, BrandAdjustment::unchanged(48.0));
    }
}
