//! Wire types for the tier worker endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Inference request as sent by load drivers and gateways.
///
/// Only `input` influences the response. The remaining fields are carried
/// for logging; `budget` is reserved for an upstream tier selector and is
/// never acted on here.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct InferenceRequest {
    #[schema(example = "bench-1")]
    pub request_id: Option<String>,
    #[schema(example = "user-1")]
    pub user_id: Option<String>,
    #[schema(example = "tenant-1")]
    pub tenant_id: Option<String>,
    /// Free-form input; non-string values are accepted
    #[schema(value_type = String, example = "test input 1 with varying length x")]
    pub input: Value,
    /// Advisory time budget in seconds
    #[schema(example = 3.5)]
    pub budget: Option<f64>,
}

impl InferenceRequest {
    /// Build a request from an already-parsed JSON body.
    ///
    /// A body that is not an object carries no fields and is read as an
    /// empty input. Fields of an unexpected type are treated as absent; an
    /// absent `input` becomes the empty string, while an explicit `null` is
    /// kept as a non-string input.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(map) => Self::from_map(map),
            _ => Self::from_map(Map::new()),
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let text = |map: &Map<String, Value>, key: &str| {
            map.get(key).and_then(Value::as_str).map(str::to_string)
        };

        let input = map
            .remove("input")
            .unwrap_or_else(|| Value::String(String::new()));

        Self {
            request_id: text(&map, "request_id"),
            user_id: text(&map, "user_id"),
            tenant_id: text(&map, "tenant_id"),
            budget: map.get("budget").and_then(Value::as_f64),
            input,
        }
    }
}

/// Synthetic inference result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InferenceResponse {
    /// `prediction_tier{N}_{fingerprint}`
    #[schema(example = "prediction_tier0_8f434346")]
    pub result: String,
    /// Rounded to 2 decimal places
    #[schema(example = 0.87)]
    pub confidence: f64,
    /// Declared nominal latency of the tier, not a measurement
    #[schema(example = 15)]
    pub model_latency_ms: u64,
}

/// Health endpoint body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "tier0_fast")]
    pub service: String,
}
