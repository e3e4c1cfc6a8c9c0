//! Tier workers
//!
//! Profiles, scoring, fingerprinting and latency simulation for the mock
//! inference tiers, plus the service type that ties them together.

pub mod config;
pub mod fingerprint;
pub mod latency;
pub mod scoring;
pub mod service;
pub mod types;

pub use config::{Tier, TierProfile};
pub use service::TierService;
pub use types::{HealthResponse, InferenceRequest, InferenceResponse};
