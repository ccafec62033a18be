//! Size Recommender Rust Implementation
//!
//! Rule-based garment size recommendation: estimates a shopper's flat body
//! widths from height, weight and shape answers, turns them into a target
//! garment width for their preferred fit, and matches that against a product's
//! size chart.
//!
//! ## Architecture
//! - `profile`: Shopper input types
//! - `chart/`: Size chart model, unit normalization, category detection
//! - `estimator/`: Body measurement estimation and body type
//! - `fit/`: Ease tables, brand profiles, target width
//! - `matcher/`: Size matching, confidence, comparison table, reasoning
//! - `recommender`: Pipeline orchestration (single + rayon batch)
//! - `request`: Wire request validation and camelCase responses
//! - `api_server` (feature `api`): axum hosting surface

pub mod error;
pub mod profile;
pub mod utils;
pub mod chart;
pub mod estimator;
pub mod fit;
pub mod matcher;
pub mod recommender;
pub mod request;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{RecommendError, ValidationError};
pub use profile::{AbdomenShape, FabricType, Gender, HipShape, UserProfile, WearingPreference};
pub use chart::{GarmentCategory, SizeChart, SizeDimensions};
pub use estimator::{estimate_body_measurements, BodyType, EstimatedBodyMeasurements};
pub use fit::{BrandFitProfiles, BrandProfile, BrandProfileTable, NoBrandProfiles};
pub use matcher::{FitDescriptor, SizeComparison};
pub use recommender::{
    ProductContext, RecommenderConfig, SizeRecommendationResult, SizeRecommender, SizeRequest,
};
pub use request::{
    BatchRecommendationRequest, BatchRecommendationResponse, SizeRecommendationRequest,
    SizeRecommendationResponse,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
