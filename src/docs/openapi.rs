//! OpenAPI specification for the tier worker API
//!
//! Every tier exposes the same contract, so a single document covers all
//! of them.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorResponse};
use crate::tiers::{HealthResponse, InferenceRequest, InferenceResponse, Tier};

/// OpenAPI specification for a tier worker
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tiered Inference Worker API",
        version = "1.0.0",
        description = "Mock inference workers: one service per quality/latency tier"
    ),
    paths(
        crate::routes::health::healthz,
        crate::routes::infer::infer
    ),
    components(
        schemas(
            Tier,
            InferenceRequest,
            InferenceResponse,
            HealthResponse,
            ErrorResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Inference", description = "Mock inference endpoint")
    )
)]
pub struct TierApiDoc;
