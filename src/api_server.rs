// Axum API Server Module
//
// Purpose: HTTP surface for the size recommender. Handlers validate the wire
// request, run the CPU-bound pipeline on the blocking pool and cache responses
// keyed by the validated request.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::{RecommendError, ValidationError};
use crate::recommender::{SizeRecommender, SizeRequest};
use crate::request::{
    BatchItemResponse, BatchOutcome, BatchRecommendationRequest, BatchRecommendationResponse,
    SizeRecommendationRequest, SizeRecommendationResponse,
};

// ============================================================================
// Application State
// ============================================================================

/// Response cache limits
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub max_entries: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl_secs: 300,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<SizeRecommender>,
    /// Responses keyed by the canonical JSON of the validated request
    pub cache: Cache<String, SizeRecommendationResponse>,
}

impl AppState {
    pub fn new(recommender: SizeRecommender, cache_config: &CacheConfig) -> Self {
        tracing::info!(
            "Initializing Moka cache ({} entries, {}s TTL)...",
            cache_config.max_entries,
            cache_config.ttl_secs
        );
        let cache = Cache::builder()
            .max_capacity(cache_config.max_entries)
            .time_to_live(Duration::from_secs(cache_config.ttl_secs))
            .build();

        Self {
            recommender: Arc::new(recommender),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Size recommendation endpoints
        .route("/api/size/recommend", post(recommend_size))
        .route("/api/size/batch", post(recommend_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

fn cache_key(request: &SizeRequest) -> Result<String, AppError> {
    serde_json::to_string(request)
        .map(|json| format!("size:{}", json))
        .map_err(|e| AppError::internal("Failed to build cache key", e.to_string()))
}

async fn recommend_size(
    State(state): State<AppState>,
    payload: Result<Json<SizeRecommendationRequest>, JsonRejection>,
) -> Result<Json<SizeRecommendationResponse>, AppError> {
    let Json(payload) = payload?;
    let request = payload.validate()?;

    let cache_key = cache_key(&request)?;
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit: {}", cache_key);
        return Ok(Json(cached));
    }

    // CPU-bound work: run in blocking thread pool
    let recommender = state.recommender.clone();
    let result = tokio::task::spawn_blocking(move || recommender.recommend(&request))
        .await
        .map_err(|e| AppError::internal("Task join error", e.to_string()))??;

    tracing::info!(
        "Recommended size {} (confidence {:.2})",
        result.size,
        result.confidence
    );

    let response = SizeRecommendationResponse::from(result);
    state.cache.insert(cache_key, response.clone()).await;

    Ok(Json(response))
}

/// One shopper against many products.
///
/// Cached products are answered from the cache, the rest are computed in one
/// rayon batch on the blocking pool. Product-level validation and engine errors
/// are reported per entry; shopper validation errors reject the whole batch.
async fn recommend_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchRecommendationRequest>, JsonRejection>,
) -> Result<Json<BatchRecommendationResponse>, AppError> {
    let Json(payload) = payload?;
    let batch = payload.validate()?;
    let total = batch.requests.len();

    let start = std::time::Instant::now();
    tracing::info!("Batch size recommendation for {} products", total);

    let mut outcomes: Vec<Option<BatchOutcome>> = vec![None; total];
    let mut pending: Vec<(usize, String, SizeRequest)> = Vec::new();
    let mut hits = 0usize;

    for (index, entry) in batch.requests.into_iter().enumerate() {
        match entry {
            Ok(request) => {
                let key = cache_key(&request)?;
                match state.cache.get(&key).await {
                    Some(cached) => {
                        hits += 1;
                        outcomes[index] = Some(BatchOutcome::Recommendation(cached));
                    }
                    None => pending.push((index, key, request)),
                }
            }
            Err(rejected) => {
                outcomes[index] = Some(BatchOutcome::Error {
                    error: rejected.error.to_string(),
                });
            }
        }
    }

    tracing::info!("Cache: {} hits, {} misses", hits, pending.len());

    let recommender = state.recommender.clone();
    let (positions, requests): (Vec<(usize, String)>, Vec<SizeRequest>) = pending
        .into_iter()
        .map(|(index, key, request)| ((index, key), request))
        .unzip();

    let computed = tokio::task::spawn_blocking(move || recommender.recommend_batch(&requests))
        .await
        .map_err(|e| AppError::internal("Rayon task failed", e.to_string()))?;

    for ((index, key), result) in positions.into_iter().zip(computed) {
        let outcome = match result {
            Ok(result) => {
                let response = SizeRecommendationResponse::from(result);
                state.cache.insert(key, response.clone()).await;
                BatchOutcome::Recommendation(response)
            }
            Err(e) => {
                tracing::warn!("Batch entry {} failed: {}", index, e);
                BatchOutcome::Error { error: e.to_string() }
            }
        };
        outcomes[index] = Some(outcome);
    }

    let results: Vec<BatchItemResponse> = batch
        .product_ids
        .into_iter()
        .zip(outcomes)
        .map(|(product_id, outcome)| BatchItemResponse {
            product_id,
            outcome: outcome.unwrap_or_else(|| BatchOutcome::Error {
                error: "No result computed".to_string(),
            }),
        })
        .collect();

    tracing::info!("Batch completed in {:?}", start.elapsed());

    Ok(Json(BatchRecommendationResponse {
        count: results.len(),
        results,
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal { message: String, details: String },
}

impl AppError {
    fn internal(message: &str, details: String) -> Self {
        AppError::Internal {
            message: message.to_string(),
            details,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::Validation(err) => err.into(),
            RecommendError::Internal { message, details } => AppError::Internal { message, details },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            AppError::Internal { message, details } => {
                tracing::error!("{}: {}", message, details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": message, "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
