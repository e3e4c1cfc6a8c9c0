//! Result fingerprint
//!
//! A short SHA-256 prefix of the request input. This is a display label
//! for correlating responses, not an identity: collisions are expected.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
pub const FINGERPRINT_LEN: usize = 8;

/// Canonical text form of an input value.
///
/// Strings hash as their raw text; any other value hashes as its compact
/// JSON serialization.
pub fn canonical_input(input: &Value) -> String {
    match input {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First 8 lowercase hex characters of SHA-256 over the canonical input
pub fn fingerprint(input: &Value) -> String {
    let digest = Sha256::digest(canonical_input(input).as_bytes());
    let mut tag = hex::encode(digest);
    tag.truncate(FINGERPRINT_LEN);
    tag
}
