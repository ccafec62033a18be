//! Garment Category Detection
//!
//! Classifies a product from its type, then its tags, then the chart itself.

use serde::{Deserialize, Serialize};

use super::size_chart::SizeChart;

/// Garment category, selects the body measurement and ease rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
}

impl GarmentCategory {
    pub fn display_text(&self) -> &'static str {
        match self {
            GarmentCategory::Tops => "tops",
            GarmentCategory::Bottoms => "bottoms",
            GarmentCategory::Dresses => "dresses",
            GarmentCategory::Outerwear => "outerwear",
        }
    }

    /// Tops and outerwear are both fitted on the chest
    pub fn is_upper_body(&self) -> bool {
        matches!(self, GarmentCategory::Tops | GarmentCategory::Outerwear)
    }
}

/// Keywords per category, checked in this order
static CATEGORY_KEYWORDS: &[(GarmentCategory, &[&str])] = &[
    (GarmentCategory::Dresses, &["dress", "gown"]),
    (
        GarmentCategory::Bottoms,
        &["pant", "jean", "short", "trouser", "skirt", "legging"],
    ),
    (
        GarmentCategory::Outerwear,
        &["jacket", "coat", "blazer", "cardigan", "hoodie", "sweater"],
    ),
];

/// First-size length (cm) above which an unlabelled garment is a dress
const DRESS_LENGTH_THRESHOLD_CM: f64 = 70.0;

/// Match a free-form product string against the keyword table
pub fn category_from_keywords(text: &str) -> Option<GarmentCategory> {
    let text = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(category, _)| *category)
}

/// Detect the garment category.
///
/// Priority: product type keywords, tag keywords (in tag order), a long first
/// size (dress), otherwise tops.
pub fn detect_category(
    product_type: Option<&str>,
    tags: &[String],
    chart: &SizeChart,
) -> GarmentCategory {
    if let Some(category) = product_type.and_then(category_from_keywords) {
        return category;
    }

    if let Some(category) = tags.iter().find_map(|tag| category_from_keywords(tag)) {
        return category;
    }

    let first_length = chart.first().and_then(|(_, dims)| dims.length);
    if first_length.is_some_and(|length| length > DRESS_LENGTH_THRESHOLD_CM) {
        return GarmentCategory::Dresses;
    }

    GarmentCategory::Tops
}
