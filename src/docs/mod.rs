//! API Documentation module
//!
//! Provides OpenAPI specification generation for the tier worker API using utoipa.

mod openapi;

pub use openapi::TierApiDoc;
