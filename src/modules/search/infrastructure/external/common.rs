use crate::shared::errors::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Build the HTTP client shared by a provider adapter's calls
pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
        })
}

/// Single availability probe against a provider's ping endpoint.
///
/// Any transport error, timeout, non-success status or cancellation yields
/// `false`; a probe never fails the caller.
pub async fn probe_endpoint(client: &Client, ping_url: &str, cancel: &CancellationToken) -> bool {
    let request = client.get(ping_url).send();

    tokio::select! {
        _ = cancel.cancelled() => {
            debug!("Availability probe cancelled for {}", ping_url);
            false
        }
        response = request => match response {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Availability probe failed for {}: {}", ping_url, e);
                false
            }
        }
    }
}
