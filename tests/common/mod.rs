//! Common test utilities for the tier workers

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use tiered_infer::{routes::create_router, AppState, Tier};

/// Start an in-process test server for `tier`
pub fn test_server(tier: Tier) -> TestServer {
    let state = Arc::new(AppState::for_tier(tier));
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Load-driver style payload
pub fn driver_payload(i: u32, input: &str) -> Value {
    json!({
        "request_id": format!("bench-{i}"),
        "user_id": format!("user-{}", i % 10),
        "tenant_id": "tenant-1",
        "input": input,
        "budget": (i % 20) as f64 / 10.0
    })
}

/// Fingerprint suffix of a `prediction_tier{N}_{fingerprint}` label
pub fn fingerprint_of(result: &str) -> &str {
    result.rsplit('_').next().unwrap_or_default()
}
