//! Simulated model latency
//!
//! The delay is a tokio timer, so it parks only the calling request's
//! future; other in-flight requests keep being served by the runtime.

use std::time::Duration;

use tracing::trace;

/// Wait out the fixed model compute time for one request
pub async fn simulate_model_latency(delay: Duration) {
    trace!(delay_ms = delay.as_millis() as u64, "Simulating model latency");
    tokio::time::sleep(delay).await;
}
