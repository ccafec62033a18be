//! Size Recommender - Main coordinator for size recommendations
//!
//! Runs the pipeline for one product: estimate the body, normalize the chart,
//! compute the fit target, match, score and explain. Every stage is a pure
//! function of its inputs; the recommender only owns read-only configuration
//! and the brand profile source, so one instance can serve concurrent callers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::chart::{detect_category, normalize_chart, GarmentCategory, SizeChart, SizeDimensions};
use crate::error::{RecommendError, ValidationError};
use crate::estimator::{estimate_body_measurements, EstimatedBodyMeasurements};
use crate::fit::{calculate_fit_target, BrandFitProfiles, FitInputs, NoBrandProfiles};
use crate::matcher::{
    calculate_confidence, compare_sizes, generate_reasoning, match_size, ConfidenceInputs,
    ReasoningContext, SizeComparison,
};
use crate::profile::UserProfile;
use crate::utils::format_cm;

/// Engine limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Charts with more sizes than this are rejected
    pub max_chart_sizes: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self { max_chart_sizes: 100 }
    }
}

/// Product-side inputs for one recommendation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductContext {
    pub size_chart: Option<SizeChart>,
    pub product_type: Option<String>,
    pub tags: Vec<String>,
}

/// Validated request: one shopper, one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRequest {
    pub profile: UserProfile,
    pub product: ProductContext,
}

/// Formatted measurements of the recommended size ("52 cm")
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GarmentMeasurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
}

impl GarmentMeasurements {
    fn from_dimensions(dims: &SizeDimensions) -> Option<Self> {
        let fmt = |value: Option<f64>| value.map(|v| format!("{} cm", format_cm(v)));
        let measurements = Self {
            chest: fmt(dims.chest),
            waist: fmt(dims.waist),
            hips: fmt(dims.hips),
            shoulder: fmt(dims.shoulder),
            length: fmt(dims.length),
        };
        (measurements != Self::default()).then_some(measurements)
    }
}

/// Recommendation for one product
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRecommendationResult {
    pub size: String,
    /// 0.50-1.00, two decimals
    pub confidence: f64,
    pub reasoning: String,
    pub measurements: EstimatedBodyMeasurements,
    pub garment_measurements: Option<GarmentMeasurements>,
    pub alternative_size: Option<String>,
    pub size_comparison: Option<SizeComparison>,
    /// None for the generic (no chart) recommendation
    pub category: Option<GarmentCategory>,
    pub is_oversized: bool,
    /// Target flat-lay width, None for the generic recommendation
    pub target_width: Option<f64>,
}

// ============================================================================
// Generic recommendation (no size chart)
// ============================================================================

const GENERIC_CONFIDENCE: f64 = 0.6;

/// (upper chest bound exclusive, label)
static GENERIC_BANDS: &[(f64, &str)] = &[(42.0, "S"), (47.0, "M"), (52.0, "L")];

/// S/M/L/XL from the estimated chest width
pub fn generic_size(chest_width: f64) -> &'static str {
    GENERIC_BANDS
        .iter()
        .find(|(upper, _)| chest_width < *upper)
        .map_or("XL", |(_, label)| *label)
}

fn generic_recommendation(body: EstimatedBodyMeasurements) -> SizeRecommendationResult {
    let size = generic_size(body.chest_width);
    let reasoning = format!(
        "Generic recommendation: size {} based on your estimated chest width of {}cm. \
         This product has no size chart, so check the brand's size guide before ordering.",
        size,
        format_cm(body.chest_width)
    );

    SizeRecommendationResult {
        size: size.to_string(),
        confidence: GENERIC_CONFIDENCE,
        reasoning,
        measurements: body,
        garment_measurements: None,
        alternative_size: None,
        size_comparison: None,
        category: None,
        is_oversized: false,
        target_width: None,
    }
}

// ============================================================================
// Recommender
// ============================================================================

/// Main size recommender
#[derive(Clone)]
pub struct SizeRecommender {
    config: RecommenderConfig,
    brands: Arc<dyn BrandFitProfiles>,
}

impl Default for SizeRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeRecommender {
    /// Recommender with default limits and no brand adjustments.
    ///
    /// Brand fit bias is opt-in through `with_brand_profiles`.
    pub fn new() -> Self {
        Self {
            config: RecommenderConfig::default(),
            brands: Arc::new(NoBrandProfiles),
        }
    }

    pub fn with_config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_brand_profiles(mut self, brands: Arc<dyn BrandFitProfiles>) -> Self {
        self.brands = brands;
        self
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommend a size for one validated request
    pub fn recommend(&self, request: &SizeRequest) -> Result<SizeRecommendationResult, RecommendError> {
        let profile = &request.profile;
        let product = &request.product;

        if let Some(chart) = &product.size_chart {
            if chart.len() > self.config.max_chart_sizes {
                return Err(ValidationError::TooManySizes {
                    count: chart.len(),
                    max: self.config.max_chart_sizes,
                }
                .into());
            }
        }

        let body = estimate_body_measurements(profile);

        let result = match product.size_chart.as_ref().filter(|chart| !chart.is_empty()) {
            Some(chart) => self.recommend_from_chart(profile, product, chart, body),
            None => {
                tracing::debug!("No size chart supplied, using generic recommendation");
                generic_recommendation(body)
            }
        };

        ensure_finite(&result)?;
        Ok(result)
    }

    /// Recommend sizes for many requests in parallel
    pub fn recommend_batch(
        &self,
        requests: &[SizeRequest],
    ) -> Vec<Result<SizeRecommendationResult, RecommendError>> {
        requests.par_iter().map(|request| self.recommend(request)).collect()
    }

    fn recommend_from_chart(
        &self,
        profile: &UserProfile,
        product: &ProductContext,
        raw_chart: &SizeChart,
        body: EstimatedBodyMeasurements,
    ) -> SizeRecommendationResult {
        let category = detect_category(product.product_type.as_deref(), &product.tags, raw_chart);
        let normalized = normalize_chart(raw_chart);

        let fit_target = calculate_fit_target(
            &FitInputs {
                body: &body,
                preference: profile.wearing_preference,
                category,
                is_oversized: normalized.is_oversized,
                fabric_type: profile.fabric_type,
                vendor: profile.vendor.as_deref(),
            },
            self.brands.as_ref(),
        );

        let matched = match_size(&normalized.chart, fit_target.target_width, category, &body);

        let confidence = calculate_confidence(&ConfidenceInputs {
            measurement_diff: matched.measurement_diff(),
            fabric_type: profile.fabric_type,
            has_optional_measurement: profile.has_optional_measurement(),
            is_oversized: normalized.is_oversized,
            preference: profile.wearing_preference,
            body_confidence: body.confidence,
        });

        // Fallback labels are not measured, so there is nothing to describe
        let garment = if matched.is_fallback() {
            None
        } else {
            normalized.chart.get(&matched.size)
        };

        let reasoning = generate_reasoning(&ReasoningContext {
            size: &matched.size,
            confidence,
            preference: profile.wearing_preference,
            category,
            is_oversized: normalized.is_oversized,
            body: &body,
            fit_target: &fit_target,
            garment,
        });

        let size_comparison = compare_sizes(
            &normalized.chart,
            fit_target.target_width,
            category,
            &body,
            normalized.is_oversized,
        );

        tracing::debug!(
            "Recommended {} ({} category, confidence {:.2}, alternative {:?})",
            matched.size,
            category.display_text(),
            confidence,
            matched.alternative_size()
        );

        SizeRecommendationResult {
            size: matched.size.clone(),
            confidence,
            reasoning,
            measurements: body,
            garment_measurements: garment.and_then(GarmentMeasurements::from_dimensions),
            alternative_size: matched.alternative_size().map(str::to_string),
            size_comparison: Some(size_comparison),
            category: Some(category),
            is_oversized: normalized.is_oversized,
            target_width: Some(fit_target.target_width),
        }
    }
}

/// Reject results carrying NaN or infinite numbers
fn ensure_finite(result: &SizeRecommendationResult) -> Result<(), RecommendError> {
    let body = &result.measurements;
    let checks = [
        ("confidence", result.confidence),
        ("chestWidth", body.chest_width),
        ("waistWidth", body.waist_width),
        ("hipWidth", body.hip_width),
        ("shoulderWidth", body.shoulder_width),
        ("targetWidth", result.target_width.unwrap_or(0.0)),
    ];

    match checks.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => {
            tracing::warn!("Non-finite {} in recommendation: {}", field, value);
            Err(RecommendError::internal(
                "Size recommendation failed",
                format!("{} evaluated to {}", field, value),
            ))
        }
        None => Ok(()),
    }
}
