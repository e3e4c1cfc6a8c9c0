//! Simulated latency integration tests
//!
//! These run against the real clock: each request must take at least the
//! tier's delay, and concurrent requests must not queue behind each other.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use futures::future::join_all;
use serde_json::json;
use tower::ServiceExt;

use tiered_infer::tiers::InferenceResponse;
use tiered_infer::{routes::create_router, AppState, Tier};

use crate::common::{driver_payload, test_server};

fn infer_request(i: u32) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/infer")
        .header("content-type", "application/json")
        .body(Body::from(driver_payload(i, "concurrent").to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_response_time_respects_tier_delay() {
    for tier in Tier::ALL {
        let server = test_server(tier);
        let delay = tier.profile().latency_delay;

        let start = Instant::now();
        let response = server.post("/infer").json(&json!({"input": "hi"})).await;
        let elapsed = start.elapsed();

        response.assert_status_ok();
        assert!(elapsed >= delay, "{tier} answered in {elapsed:?}, expected >= {delay:?}");
    }
}

#[tokio::test]
async fn test_concurrent_requests_do_not_serialize() {
    let router = create_router(Arc::new(AppState::for_tier(Tier::Best)));
    let requests = 6u32;

    let start = Instant::now();
    let responses = join_all((0..requests).map(|i| router.clone().oneshot(infer_request(i)))).await;
    let elapsed = start.elapsed();

    let mut bodies = Vec::new();
    for response in responses {
        let response = response.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        bodies.push(serde_json::from_slice::<InferenceResponse>(&bytes).unwrap());
    }
    assert_eq!(bodies.len(), requests as usize);
    assert!(bodies.iter().all(|b| b.model_latency_ms == 250));

    // Serial execution would take 6 x 250ms.
    assert!(elapsed >= Duration::from_millis(250));
    assert!(elapsed < Duration::from_millis(1000), "requests were serialized: {elapsed:?}");
}
