use serde::Deserialize;

/// Execute endpoint of the public Piston instance.
pub const DEFAULT_EXECUTE_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Connection settings for the code execution API.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutorConfig {
    /// Full URL of the execute endpoint.
    pub url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Minimum delay between consecutive execution requests, in milliseconds.
    ///
    /// The public Piston instance throttles callers hard, so batch runs space
    /// their calls out by this much.
    pub throttle_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_EXECUTE_URL.to_string(),
            request_timeout_secs: 30,
            throttle_ms: 120,
        }
    }
}
