// API Integration Tests
//
// Purpose: Exercise the HTTP endpoints end to end through the router
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use size_recommender_rust::api_server::CacheConfig;
    use size_recommender_rust::fit::BrandAdjustment;
    use size_recommender_rust::{
        create_router, AppState, BrandFitProfiles, GarmentCategory, RecommenderConfig, SizeRecommender,
    };
    use std::sync::Arc;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app
    fn create_test_app() -> axum::Router {
        let state = AppState::new(SizeRecommender::new(), &CacheConfig::default());
        create_router(state)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // Helper: POST a JSON body
    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn shopper() -> Value {
        json!({
            "height": 175,
            "weight": 70,
            "gender": "male",
            "age": 30,
            "abdomenShape": "medium",
            "hipShape": "average",
            "wearingPreference": "normal"
        })
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Single Recommendation
    // =========================================================================

    #[tokio::test]
    async fn test_recommend_without_chart() {
        let response = create_test_app()
            .oneshot(post_json("/api/size/recommend", &shopper()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["size"], "M");
        assert_eq!(body["confidence"], 0.6);
        assert_eq!(body["measurements"]["estimatedChestWidth"], 45.0);
        assert!(body["measurements"]["estimatedShoulderWidth"].is_number());
        assert!(body.get("sizeComparison").is_none());
        assert!(body.get("garmentMeasurements").is_none());
    }

    #[tokio::test]
    async fn test_recommend_with_chart() {
        let mut request = shopper();
        request["sizeDimensions"] = json!({"S": {"chest": 40}, "M": {"chest": 46}, "L": {"chest": 52}});
        request["productType"] = json!("T-Shirt");

        let response = create_test_app()
            .oneshot(post_json("/api/size/recommend", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["size"], "L");
        assert_eq!(body["confidence"], 0.72);
        assert_eq!(body["garmentMeasurements"]["chest"], "52 cm");
        assert_eq!(body["sizeComparison"]["M"], "Snug fit");
        assert_eq!(body["sizeComparison"]["L"], "Slightly loose");
        assert!(body.get("alternativeSize").is_none());
        assert!(body["reasoning"].as_str().unwrap().starts_with("Size L should fit well"));
    }

    #[tokio::test]
    async fn test_repeated_request_served_identically() {
        let mut request = shopper();
        request["sizeDimensions"] = json!({"S": {"chest": 44}, "M": {"chest": 49}});
        let app = create_test_app();

        let first = app.clone().oneshot(post_json("/api/size/recommend", &request)).await.unwrap();
        let second = app.oneshot(post_json("/api/size/recommend", &request)).await.unwrap();

        assert_eq!(json_response(first).await, json_response(second).await);
    }

    // =========================================================================
    // Section 3: Error Responses
    // =========================================================================

    #[tokio::test]
    async fn test_missing_hip_shape_returns_400() {
        let mut request = shopper();
        request.as_object_mut().unwrap().remove("hipShape");

        let response = create_test_app()
            .oneshot(post_json("/api/size/recommend", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert_eq!(body["error"], "missing required field: hipShape");
    }

    #[tokio::test]
    async fn test_invalid_choice_returns_400() {
        let mut request = shopper();
        request["wearingPreference"] = json!("baggy");

        let response = create_test_app()
            .oneshot(post_json("/api/size/recommend", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("wearingPreference"));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/size/recommend")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"height\": \"tall\""))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_oversized_chart_cap_returns_400() {
        let recommender = SizeRecommender::new().with_config(RecommenderConfig { max_chart_sizes: 2 });
        let app = create_router(AppState::new(recommender, &CacheConfig::default()));

        let mut request = shopper();
        request["sizeDimensions"] = json!({"S": {"chest": 44}, "M": {"chest": 49}, "L": {"chest": 54}});

        let response = app.oneshot(post_json("/api/size/recommend", &request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "size chart has 3 sizes, more than the allowed 2");
    }

    struct NanBrandProfiles;

    impl BrandFitProfiles for NanBrandProfiles {
        fn adjust(&self, _vendor: Option<&str>, _width: f64, _category: GarmentCategory) -> BrandAdjustment {
            BrandAdjustment::unchanged(f64::NAN)
        }
    }

    #[tokio::test]
    async fn test_non_finite_result_returns_500() {
        let recommender = SizeRecommender::new().with_brand_profiles(Arc::new(NanBrandProfiles));
        let app = create_router(AppState::new(recommender, &CacheConfig::default()));

        let mut request = shopper();
        request["sizeDimensions"] = json!({"S": {"chest": 40}, "M": {"chest": 46}, "L": {"chest": 52}});

        let response = app.oneshot(post_json("/api/size/recommend", &request)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Size recommendation failed");
        assert!(body["details"].as_str().unwrap().contains("targetWidth"));
    }

    // =========================================================================
    // Section 4: Batch Recommendation
    // =========================================================================

    #[tokio::test]
    async fn test_batch_recommendation() {
        let mut request = shopper();
        request["products"] = json!([
            {"productId": "tee", "sizeDimensions": {"S": {"chest": 40}, "M": {"chest": 46}, "L": {"chest": 52}}},
            {"productId": "mystery"},
            {"productId": "jeans", "fabricType": "denim", "sizeDimensions": {"30": {"waist": 40, "hips": 48}}}
        ]);

        let response = create_test_app()
            .oneshot(post_json("/api/size/batch", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["count"], 3);

        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["productId"], "tee");
        assert_eq!(results[0]["size"], "L");
        assert_eq!(results[1]["productId"], "mystery");
        assert_eq!(results[1]["confidence"], 0.6);
        assert_eq!(results[2]["productId"], "jeans");
        assert!(results[2]["error"].as_str().unwrap().contains("fabricType"));
        assert!(results[2].get("size").is_none());
    }

    #[tokio::test]
    async fn test_batch_with_invalid_shopper_returns_400() {
        let mut request = shopper();
        request["height"] = json!(-170);
        request["products"] = json!([{"productId": "tee"}]);

        let response = create_test_app()
            .oneshot(post_json("/api/size/batch", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("height"));
    }
}
