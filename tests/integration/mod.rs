//! Integration tests for the tier workers
//!
//! These tests drive the full router through `axum-test`, one server per
//! tier, and check the wire contract each tier exposes.

mod health;
mod latency;
