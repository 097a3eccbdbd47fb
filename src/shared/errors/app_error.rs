use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkUnavailable("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkUnavailable("Failed to connect to registry endpoint".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Device is not authorized for the registry".to_string())
                }
                500..=599 => AppError::ServerError(format!("HTTP {}", status)),
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// Message shown to the checkpoint operator. Terse on purpose, the
    /// result panel has very little room.
    pub fn operator_message(&self) -> String {
        match self {
            AppError::NetworkUnavailable(_) => {
                "ОТСУТСТВУЕТ ИНТЕРНЕТ: Проверьте Wi-Fi или мобильные данные.".to_string()
            }
            AppError::Unauthorized(_) => {
                "ДОСТУП ЗАПРЕЩЁН: Устройство не авторизовано в реестре.".to_string()
            }
            other => format!("{}", other),
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
