//! Configuration management for the tier workers
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use crate::tiers::Tier;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tier served by this process
    pub tier: Tier,
    /// Host to bind to
    pub host: String,
    /// Port to listen on (defaults to the tier's conventional port)
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tier: Tier = lookup("TIER")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .context("Invalid TIER")?;

        let port = match lookup("PORT") {
            Some(port) => port.parse().context("Invalid PORT")?,
            None => tier.default_port(),
        };

        Ok(Self {
            tier,
            host: lookup("TIER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        })
    }
}
