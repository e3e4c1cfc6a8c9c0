//! Tier profiles
//!
//! Each tier is described by a `TierProfile`: the constants that drive its
//! confidence heuristic and its simulated model latency.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

/// Quality/latency tier of the mock model stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Fast, low accuracy
    Fast,
    /// Balanced
    Mid,
    /// Best quality, slowest
    Best,
}

impl Tier {
    /// All tiers, fastest first
    pub const ALL: [Tier; 3] = [Tier::Fast, Tier::Mid, Tier::Best];

    /// Numeric tier index used in result labels (`prediction_tier{N}_...`)
    pub fn index(&self) -> u8 {
        match self {
            Tier::Fast => 0,
            Tier::Mid => 1,
            Tier::Best => 2,
        }
    }

    /// Service name reported by the health endpoint
    pub fn service_name(&self) -> &'static str {
        match self {
            Tier::Fast => "tier0_fast",
            Tier::Mid => "tier1_mid",
            Tier::Best => "tier2_best",
        }
    }

    /// Conventional listening port for a standalone worker of this tier
    pub fn default_port(&self) -> u16 {
        match self {
            Tier::Fast => 8090,
            Tier::Mid => 8091,
            Tier::Best => 8092,
        }
    }

    /// Constants for this tier
    pub fn profile(&self) -> TierProfile {
        TierProfile::for_tier(*self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

/// Error returned when a tier selector cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}' (expected 0, 1, 2 or a tier name)")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    /// Accepts `0`/`1`/`2`, the service name (`tier1_mid`) or the short
    /// name (`mid`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "tier0" | "tier0_fast" | "fast" => Ok(Tier::Fast),
            "1" | "tier1" | "tier1_mid" | "mid" => Ok(Tier::Mid),
            "2" | "tier2" | "tier2_best" | "best" => Ok(Tier::Best),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// Constants parameterizing one tier service
#[derive(Debug, Clone, PartialEq)]
pub struct TierProfile {
    pub tier: Tier,
    /// Confidence for mid-length (10..50 chars) and non-string inputs
    pub base_confidence: f64,
    /// Fixed simulated model compute time
    pub latency_delay: Duration,
    /// Lowest confidence this tier may report
    pub floor: f64,
    /// Highest confidence this tier may report
    pub ceiling: f64,
    /// Added for short inputs (< 10 chars), capped at `ceiling`
    pub small_bonus: f64,
    /// Subtracted for inputs of 50..100 chars, bounded by `mid_floor`
    pub mid_penalty: f64,
    pub mid_floor: f64,
    /// Subtracted for inputs of 100+ chars, bounded by `floor`
    pub large_penalty: f64,
}

impl TierProfile {
    /// Fixed profile table
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Fast => Self {
                tier,
                base_confidence: 0.72,
                latency_delay: Duration::from_millis(15),
                floor: 0.45,
                ceiling: 0.95,
                small_bonus: 0.15,
                mid_penalty: 0.10,
                mid_floor: 0.50,
                large_penalty: 0.20,
            },
            Tier::Mid => Self {
                tier,
                base_confidence: 0.88,
                latency_delay: Duration::from_millis(85),
                floor: 0.70,
                ceiling: 0.98,
                small_bonus: 0.08,
                mid_penalty: 0.10,
                mid_floor: 0.75,
                large_penalty: 0.15,
            },
            Tier::Best => Self {
                tier,
                base_confidence: 0.96,
                latency_delay: Duration::from_millis(250),
                floor: 0.88,
                ceiling: 0.99,
                small_bonus: 0.02,
                mid_penalty: 0.05,
                mid_floor: 0.90,
                large_penalty: 0.06,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.tier.service_name()
    }

    /// Declared nominal latency reported as `model_latency_ms`.
    ///
    /// This is the profile constant, not a measurement of the request.
    pub fn model_latency_ms(&self) -> u64 {
        self.latency_delay.as_millis() as u64
    }
}
