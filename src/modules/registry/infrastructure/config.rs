use std::env;
use std::time::Duration;

/// Published Apps-Script deployment backing the production registry sheet.
const DEFAULT_REGISTRY_URL: &str =
    "https://script.google.com/macros/s/AKfycbxso3bNKQrVsvYhBXYBSJaPtNmYEEHUN7IxuUyi234zbNj9RTmoIrlC06NH5uMegn22BA/exec";

const DEFAULT_API_KEY: &str = "12345";

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Client-side spacing between calls; the deployment throttles hard.
    pub min_request_interval: Duration,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            base_url: env::var("PROPUSK_REGISTRY_URL")
                .unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string()),
            api_key: env::var("PROPUSK_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(30),
            min_request_interval: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production_deployment() {
        let config = RegistryConfig::default();
        assert!(config.base_url.starts_with("https://script.google.com/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
