use crate::modules::plate::CanonicalPlate;
use crate::modules::registry::domain::LookupReply;
use crate::modules::registry::infrastructure::config::RegistryConfig;
use crate::modules::registry::traits::RegistryLookup;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::http::create_http_client;
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::RateLimiter;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Registry client for the Apps-Script sheet endpoint.
///
/// The endpoint is a plain GET that answers 200 with either a result list
/// or an `{error, code}` body. Redirect-following matters: Apps Script
/// serves the payload from a second googleusercontent host (reqwest
/// follows redirects by default).
pub struct SheetsRegistryClient {
    client: Client,
    config: RegistryConfig,
    rate_limiter: RateLimiter,
}

impl SheetsRegistryClient {
    pub fn new(config: RegistryConfig) -> AppResult<Self> {
        let client = create_http_client(config.timeout.as_secs(), "Propusk-Kiosk/1.0")?;
        let rate_limiter = RateLimiter::from_interval(config.min_request_interval);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    fn lookup_url(&self, plate: &str, device_id: &str, cache_buster: i64) -> String {
        let t = cache_buster.to_string();
        let params = [
            ("plate", plate),
            ("apiKey", self.config.api_key.as_str()),
            ("deviceId", device_id),
            ("t", t.as_str()),
        ];
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.config.base_url, query)
    }
}

#[async_trait]
impl RegistryLookup for SheetsRegistryClient {
    async fn lookup(&self, plate: &CanonicalPlate, device_id: &str) -> AppResult<LookupReply> {
        self.rate_limiter.wait().await;

        let url = self.lookup_url(plate.as_str(), device_id, chrono::Utc::now().timestamp_millis());
        LogContext::lookup_operation(plate.as_str(), device_id, None);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let reply = response.json::<LookupReply>().await.map_err(|e| {
            warn!("Registry returned an undecodable body: {}", e);
            AppError::MalformedResponse(format!("Failed to parse registry response: {}", e))
        })?;

        LogContext::lookup_operation(plate.as_str(), device_id, Some(reply.results.len()));
        if reply.error.is_some() || reply.code.is_some() {
            debug!(
                "Registry flagged the request: error={:?}, code={:?}",
                reply.error, reply.code
            );
        }

        Ok(reply)
    }
}
