use std::time::Duration;

use parley_core::ParleyError;

const USER_AGENT: &str = concat!("parley/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by one collaborator, with a fixed per-request timeout.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, ParleyError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ParleyError::Service(format!("failed to build HTTP client: {e}")))
}

/// Strip trailing slashes so paths can be appended with `format!`.
pub(crate) fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
