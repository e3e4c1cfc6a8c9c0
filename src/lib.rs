//! Tiered Infer - mock inference workers for a tiered model-serving stack
//!
//! Each process serves one tier (fast, mid or best). Responses carry a
//! deterministic confidence derived from the input length, a short input
//! fingerprint, and the tier's declared latency; every request waits out
//! the tier's simulated model latency without blocking other requests.

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;
pub mod tiers;

pub use crate::config::Config;
pub use crate::tiers::{Tier, TierProfile, TierService};

/// Application state shared across all request handlers
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub service: TierService,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        let service = TierService::for_tier(config.tier);
        Self { config, service }
    }

    /// State for a tier with default bind settings
    pub fn for_tier(tier: Tier) -> Self {
        let config = Config {
            tier,
            host: "127.0.0.1".to_string(),
            port: tier.default_port(),
            log_format: crate::config::LogFormat::Text,
        };
        Self::new(config)
    }
}
