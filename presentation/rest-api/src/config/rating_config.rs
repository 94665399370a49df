use std::env;
use std::time::Duration;

const DEFAULT_SUBMISSION_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Rating submission settings
#[derive(Debug, Clone)]
pub struct RatingConfig {
    /// Upper bound for a widget click round trip
    pub submission_timeout: Duration,
    /// Artificial delay of the in-process transport
    pub simulated_latency: Duration,
    /// Remote rating backend; `None` submits in process
    pub backend_url: Option<String>,
    /// Connection retries of the HTTP transport
    pub max_retries: u32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            submission_timeout: Duration::from_millis(DEFAULT_SUBMISSION_TIMEOUT_MS),
            simulated_latency: Duration::ZERO,
            backend_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RatingConfig {
    /// Load rating configuration from environment variables
    ///
    /// Environment variables:
    /// - SUBMISSION_TIMEOUT_MS: Round trip timeout in milliseconds (default: 5000)
    /// - SIMULATED_LATENCY_MS: Delay added by the in-process transport (default: 0)
    /// - RATING_BACKEND_URL: Base URL of a remote rating backend (default: unset)
    /// - TRANSPORT_MAX_RETRIES: Connection retries for the remote backend (default: 2)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str| {
            var(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
        };

        Self {
            submission_timeout: millis("SUBMISSION_TIMEOUT_MS")
                .filter(|d| !d.is_zero())
                .unwrap_or(defaults.submission_timeout),
            simulated_latency: millis("SIMULATED_LATENCY_MS").unwrap_or(defaults.simulated_latency),
            backend_url: var("RATING_BACKEND_URL").filter(|url| !url.trim().is_empty()),
            max_retries: var("TRANSPORT_MAX_RETRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_retries),
        }
    }
}
