//! Inference endpoint
//!
//! The body is read as raw bytes and parsed here so that callers omitting
//! `Content-Type: application/json` are still served.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    tiers::{InferenceRequest, InferenceResponse},
    AppState,
};

/// Run a mock inference on this worker's tier
#[utoipa::path(
    post,
    path = "/infer",
    tag = "Inference",
    request_body = InferenceRequest,
    responses(
        (status = 200, description = "Synthetic prediction", body = InferenceResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse)
    )
)]
pub async fn infer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<InferenceResponse>> {
    let request = parse_request(&body).inspect_err(|e| {
        debug!(
            tier = %state.config.tier,
            error = %e,
            "Rejected inference request"
        );
    })?;

    Ok(Json(state.service.infer(&request).await))
}

fn parse_request(body: &[u8]) -> AppResult<InferenceRequest> {
    let value: Value = serde_json::from_slice(body).map_err(AppError::from)?;
    Ok(InferenceRequest::from_json(value))
}
