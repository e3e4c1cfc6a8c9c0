//! Health endpoint integration tests
//!
//! - GET /healthz - static status with the tier's service name

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use tiered_infer::Tier;

use crate::common::test_server;

#[tokio::test]
async fn test_healthz_reports_each_tier() {
    for (tier, name) in [
        (Tier::Fast, "tier0_fast"),
        (Tier::Mid, "tier1_mid"),
        (Tier::Best, "tier2_best"),
    ] {
        let server = test_server(tier);
        let response = server.get("/healthz").await;

        response.assert_status_ok();
        let json: Value = response.json();
        assert_eq!(json, json!({"status": "ok", "service": name}));
    }
}

#[tokio::test]
async fn test_healthz_accepts_get_only() {
    let server = test_server(Tier::Fast);

    let response = server.post("/healthz").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = test_server(Tier::Mid);
    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["paths"].get("/infer").is_some());
    assert!(json["paths"].get("/healthz").is_some());
}
