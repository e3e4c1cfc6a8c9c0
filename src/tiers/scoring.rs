//! Confidence scoring heuristic
//!
//! Short inputs earn a small bonus, long inputs a penalty. The result
//! always stays inside the tier's `[floor, ceiling]` band.

use serde_json::Value;

use super::config::TierProfile;

const SHORT_INPUT_CHARS: usize = 10;
const MEDIUM_INPUT_CHARS: usize = 50;
const LONG_INPUT_CHARS: usize = 100;

/// Deterministic confidence for `input` under `profile`.
///
/// Non-string and empty inputs get the base confidence unchanged. The
/// value is not rounded here; see [`round_confidence`].
pub fn confidence_score(input: &Value, profile: &TierProfile) -> f64 {
    let base = profile.base_confidence;
    let text = match input {
        Value::String(s) if !s.is_empty() => s,
        _ => return base,
    };

    let score = match text.chars().count() {
        n if n < SHORT_INPUT_CHARS => (base + profile.small_bonus).min(profile.ceiling),
        n if n < MEDIUM_INPUT_CHARS => base,
        n if n < LONG_INPUT_CHARS => (base - profile.mid_penalty).max(profile.mid_floor),
        _ => (base - profile.large_penalty).max(profile.floor),
    };

    score.clamp(profile.floor, profile.ceiling)
}

/// Round to 2 decimal places for the wire response
pub fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
