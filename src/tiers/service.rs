//! Tier service
//!
//! One parameterized service type answers inference requests for any
//! tier. Confidence and fingerprint are computed from the input; the only
//! time spent is the tier's fixed simulated latency.

use tracing::debug;

use super::config::{Tier, TierProfile};
use super::fingerprint::fingerprint;
use super::latency::simulate_model_latency;
use super::scoring::{confidence_score, round_confidence};
use super::types::{HealthResponse, InferenceRequest, InferenceResponse};

/// Mock inference worker for a single tier
#[derive(Debug, Clone)]
pub struct TierService {
    profile: TierProfile,
}

impl TierService {
    pub fn new(profile: TierProfile) -> Self {
        Self { profile }
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self::new(tier.profile())
    }

    /// Health body; this never fails
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            service: self.profile.name().to_string(),
        }
    }

    /// Produce the synthetic result for `request` after the tier's delay
    pub async fn infer(&self, request: &InferenceRequest) -> InferenceResponse {
        let confidence = confidence_score(&request.input, &self.profile);

        simulate_model_latency(self.profile.latency_delay).await;

        let tag = fingerprint(&request.input);
        let response = InferenceResponse {
            result: format!("prediction_tier{}_{}", self.profile.tier.index(), tag),
            confidence: round_confidence(confidence),
            model_latency_ms: self.profile.model_latency_ms(),
        };

        debug!(
            tier = %self.profile.tier,
            request_id = request.request_id.as_deref().unwrap_or("-"),
            tenant_id = request.tenant_id.as_deref().unwrap_or("-"),
            budget = ?request.budget,
            confidence = response.confidence,
            fingerprint = %tag,
            "Inference served"
        );

        response
    }
}
