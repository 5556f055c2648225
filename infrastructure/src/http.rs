//! Shared HTTP client construction

use std::time::Duration;

const USER_AGENT: &str = concat!("postpilot/", env!("CARGO_PKG_VERSION"));

/// Build the `reqwest` client shared by every HTTP adapter.
///
/// No timeout is applied unless one is configured.
pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
