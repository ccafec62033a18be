//! Wire Request/Response Types
//!
//! JSON shapes accepted and produced by hosting layers. Every request field is
//! optional on the wire so that a missing field surfaces as a
//! `ValidationError::MissingField` naming it, rather than as a generic
//! deserialization failure. `validate()` is the only way into the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::chart::SizeChart;
use crate::error::ValidationError;
use crate::matcher::SizeComparison;
use crate::profile::{FabricType, UserProfile};
use crate::recommender::{GarmentMeasurements, ProductContext, SizeRecommendationResult, SizeRequest};

// ============================================================================
// Requests
// ============================================================================

/// Shopper fields shared by single and batch requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopperInput {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub age: Option<f64>,
    pub abdomen_shape: Option<String>,
    pub hip_shape: Option<String>,
    pub wearing_preference: Option<String>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub shoulder: Option<f64>,
}

/// Product fields: chart, category hints, fabric and brand
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Echoed back in batch responses
    pub product_id: Option<String>,
    pub size_dimensions: Option<SizeChart>,
    pub product_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub fabric_type: Option<String>,
    pub vendor: Option<String>,
}

/// Single recommendation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeRecommendationRequest {
    #[serde(flatten)]
    pub shopper: ShopperInput,
    #[serde(flatten)]
    pub product: ProductInput,
}

/// One shopper, many products
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRecommendationRequest {
    #[serde(flatten)]
    pub shopper: ShopperInput,
    #[serde(default)]
    pub products: Vec<ProductInput>,
}

fn positive_number(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidNumber { field, value })
    }
}

fn required_number(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    positive_number(field, value)
}

fn optional_number(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    value.map(|v| positive_number(field, v)).transpose()
}

fn required_choice<T>(field: &'static str, value: Option<&str>) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    value.ok_or(ValidationError::MissingField(field))?.parse()
}

impl ShopperInput {
    /// Validate the shopper fields in wire order
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let height = required_number("height", self.height)?;
        let weight = required_number("weight", self.weight)?;
        let gender = required_choice("gender", self.gender.as_deref())?;
        let age = required_number("age", self.age)?;
        let abdomen_shape = required_choice("abdomenShape", self.abdomen_shape.as_deref())?;
        let hip_shape = required_choice("hipShape", self.hip_shape.as_deref())?;
        let wearing_preference =
            required_choice("wearingPreference", self.wearing_preference.as_deref())?;

        let mut profile = UserProfile::new(
            gender,
            height,
            weight,
            age,
            abdomen_shape,
            hip_shape,
            wearing_preference,
        );
        profile.chest = optional_number("chest", self.chest)?;
        profile.waist = optional_number("waist", self.waist)?;
        profile.hip = optional_number("hip", self.hip)?;
        profile.shoulder = optional_number("shoulder", self.shoulder)?;
        Ok(profile)
    }
}

impl ProductInput {
    /// Combine with a validated shopper profile
    pub fn validate(self, profile: &UserProfile) -> Result<SizeRequest, ValidationError> {
        let mut profile = profile.clone();
        profile.fabric_type = self
            .fabric_type
            .as_deref()
            .map(str::parse::<FabricType>)
            .transpose()?;
        profile.vendor = self
            .vendor
            .map(|vendor| vendor.trim().to_string())
            .filter(|vendor| !vendor.is_empty());

        Ok(SizeRequest {
            profile,
            product: ProductContext {
                size_chart: self.size_dimensions,
                product_type: self.product_type,
                tags: self.tags.unwrap_or_default(),
            },
        })
    }
}

impl SizeRecommendationRequest {
    pub fn validate(self) -> Result<SizeRequest, ValidationError> {
        let profile = self.shopper.validate()?;
        self.product.validate(&profile)
    }
}

/// A product that failed validation inside an otherwise valid batch
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedProduct {
    pub index: usize,
    pub product_id: Option<String>,
    pub error: ValidationError,
}

/// Validated batch: shopper errors fail the whole batch, product errors only
/// their own entry
#[derive(Debug, Clone)]
pub struct ValidatedBatch {
    pub product_ids: Vec<Option<String>>,
    /// One entry per product, in request order
    pub requests: Vec<Result<SizeRequest, RejectedProduct>>,
}

impl BatchRecommendationRequest {
    pub fn validate(self) -> Result<ValidatedBatch, ValidationError> {
        let profile = self.shopper.validate()?;

        let mut product_ids = Vec::with_capacity(self.products.len());
        let mut requests = Vec::with_capacity(self.products.len());
        for (index, product) in self.products.into_iter().enumerate() {
            let product_id = product.product_id.clone();
            product_ids.push(product_id.clone());
            requests.push(product.validate(&profile).map_err(|error| RejectedProduct {
                index,
                product_id,
                error,
            }));
        }

        Ok(ValidatedBatch { product_ids, requests })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Estimated body widths (flat, cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementsView {
    pub estimated_chest_width: f64,
    pub estimated_waist_width: f64,
    pub estimated_hip_width: f64,
    pub estimated_shoulder_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendationResponse {
    pub size: String,
    pub confidence: f64,
    pub reasoning: String,
    pub measurements: MeasurementsView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garment_measurements: Option<GarmentMeasurements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_comparison: Option<SizeComparison>,
}

impl From<SizeRecommendationResult> for SizeRecommendationResponse {
    fn from(result: SizeRecommendationResult) -> Self {
        let body = result.measurements;
        Self {
            size: result.size,
            confidence: result.confidence,
            reasoning: result.reasoning,
            measurements: MeasurementsView {
                estimated_chest_width: body.chest_width,
                estimated_waist_width: body.waist_width,
                estimated_hip_width: body.hip_width,
                estimated_shoulder_width: body.shoulder_width,
            },
            garment_measurements: result.garment_measurements,
            alternative_size: result.alternative_size,
            size_comparison: result.size_comparison,
        }
    }
}

/// Batch entry: a recommendation or the error for that product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Recommendation(SizeRecommendationResponse),
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecommendationResponse {
    pub results: Vec<BatchItemResponse>,
    pub count: usize,
}
