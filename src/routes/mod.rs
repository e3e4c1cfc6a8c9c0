//! HTTP routes for the tier workers
//!
//! Every tier exposes the same two endpoints plus its OpenAPI document.

pub mod health;
pub mod infer;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{docs::TierApiDoc, AppState};

/// Handler for the raw OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(TierApiDoc::openapi())
}

/// Create the worker router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/infer", post(infer::infer))
        .route("/openapi.json", get(openapi_json))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
