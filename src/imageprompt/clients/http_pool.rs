//! HTTP client construction for backend wrappers.
//!
//! Each backend client owns one `reqwest::Client`, built once when the wrapper is created and
//! reused for every request it sends. The client is configured for persistent connections:
//! - `pool_idle_timeout`: Keeps idle connections alive for 90 seconds
//! - `pool_max_idle_per_host`: Allows up to 10 idle connections per host
//! - `tcp_keepalive`: Sends keepalive packets every 60 seconds to prevent connection closure
//! - `connect_timeout`: Bounded by the request timeout, capped at 30 seconds
//! - `timeout`: The configured bound on a whole request

use crate::imageprompt::error::{PromptError, PromptResult};
use std::time::Duration;

const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a pooled HTTP client whose requests are bounded by `request_timeout`.
pub fn build_http_client(request_timeout: Duration) -> PromptResult<reqwest::Client> {
    reqwest::ClientBuilder::new()
        // Keep idle connections alive for 90 seconds
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .pool_max_idle_per_host(10)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .connect_timeout(request_timeout.min(MAX_CONNECT_TIMEOUT))
        .timeout(request_timeout)
        .build()
        .map_err(|err| PromptError::invalid_input(format!("Failed to build HTTP client: {}", err)))
}
