use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Shared client for every outbound call. `timeout` bounds each request
/// end to end, including reading the body.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
}

/// Drains an unwanted body so the connection can return to the pool.
pub(crate) async fn discard_body(response: Response) {
    if let Err(err) = response.bytes().await {
        debug!(error = %err, "failed to drain response body");
    }
}
