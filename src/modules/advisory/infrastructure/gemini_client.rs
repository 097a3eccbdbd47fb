use crate::modules::advisory::traits::{
    AdvisoryGenerator, ADVISORY_DEFAULT_VERDICT, ADVISORY_FALLBACK,
};
use crate::modules::registry::VehicleRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::http::create_http_client;
use crate::shared::utils::logger::TimedOperation;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use tracing::warn;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const SYSTEM_INSTRUCTION: &str =
    "Ты ассистент службы безопасности. Отвечай строго, профессионально и только по делу на русском языке.";

#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub api_key: String,
    pub model: String,
}

impl AdvisoryConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: env::var("PROPUSK_GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("PROPUSK_GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
        }
    }
}

/// Gemini-backed advisory generator.
///
/// One short generateContent call per found record, low temperature, strict
/// security-guard register. Any failure along the way collapses into the
/// static fallback line.
pub struct GeminiAdvisoryClient {
    client: Client,
    config: AdvisoryConfig,
}

impl GeminiAdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> AppResult<Self> {
        let client = create_http_client(15, "Propusk-Kiosk/1.0")?;
        Ok(Self { client, config })
    }

    /// Request body for one record. `system_instruction` is snake_case,
    /// `generationConfig` camelCase; the generateContent endpoint accepts
    /// exactly this mix.
    fn build_request(record: &VehicleRecord) -> Value {
        let summary = record
            .summary_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ");

        json!({
            "contents": [{
                "role": "user",
                "parts": [{
                    "text": format!(
                        "Запись реестра: {}. Дай краткий (до 10 слов) вердикт для охраны: можно ли впускать и кто это.",
                        summary
                    )
                }]
            }],
            "system_instruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "temperature": 0.1
            }
        })
    }

    /// First candidate text, if the model produced any.
    fn extract_text(response: &Value) -> Option<String> {
        let parts = response
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("");

        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    async fn generate(&self, record: &VehicleRecord) -> AppResult<Option<String>> {
        if self.config.api_key.is_empty() {
            return Err(AppError::Unauthorized(
                "Advisory API key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent",
            API_BASE, self.config.model
        );
        let timer = TimedOperation::new("advisory generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&Self::build_request(record))
            .send()
            .await?
            .error_for_status()?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        timer.finish();
        Ok(Self::extract_text(&body))
    }
}

#[async_trait]
impl AdvisoryGenerator for GeminiAdvisoryClient {
    async fn advise(&self, record: &VehicleRecord) -> String {
        match self.generate(record).await {
            Ok(Some(text)) => text,
            Ok(None) => ADVISORY_DEFAULT_VERDICT.to_string(),
            Err(e) => {
                warn!("Advisory generation failed: {}", e);
                ADVISORY_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VehicleRecord {
        serde_json::from_str(
            r#"{"Гос. номер":"А123ВС77","Марка/модель":"LADA VESTA",
                "Владелец":"Иванов И.И.","_rowId":3}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_request_carries_record_summary_and_guard_register() {
        let body = GeminiAdvisoryClient::build_request(&record());

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Гос. номер: А123ВС77"));
        assert!(prompt.contains("LADA VESTA"));
        assert!(!prompt.contains("_rowId"));

        let system = body["system_instruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("службы безопасности"));
        assert_eq!(body["generationConfig"]["temperature"], 0.1);
    }

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Допустить: " },
                    { "text": "сотрудник цеха 2." }
                ]}
            }]
        });
        assert_eq!(
            GeminiAdvisoryClient::extract_text(&response),
            Some("Допустить: сотрудник цеха 2.".to_string())
        );
    }

    #[test]
    fn test_extract_text_handles_empty_candidates() {
        assert_eq!(GeminiAdvisoryClient::extract_text(&json!({})), None);
        assert_eq!(
            GeminiAdvisoryClient::extract_text(&json!({
                "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
            })),
            None
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_degrades_to_fallback() {
        let client = GeminiAdvisoryClient::new(AdvisoryConfig {
            api_key: String::new(),
            model: "gemini-3-flash-preview".to_string(),
        })
        .unwrap();

        assert_eq!(client.advise(&record()).await, ADVISORY_FALLBACK);
    }
}
