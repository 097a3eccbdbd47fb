use crate::shared::errors::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;

/// Build the reqwest client shared by the external collaborators.
/// Kiosks sit on flaky guard-booth Wi-Fi; the timeout keeps a dead link
/// from pinning the session in Searching forever.
pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}
