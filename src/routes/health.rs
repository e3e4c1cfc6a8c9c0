//! Health check endpoint
//!
//! `/healthz` reports the tier's service name. It has no dependencies and
//! cannot fail.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{tiers::HealthResponse, AppState};

/// Liveness of the tier worker
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "Health",
    responses(
        (status = 200, description = "Worker is up", body = HealthResponse)
    )
)]
pub async fn healthz(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.service.health())
}
