//! Wire-shape entities for the remote vehicle registry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::errors::AppError;

/// One registry row. The registry is operator-maintained and grows columns
/// without notice, so everything beyond the three well-known ones lands in
/// `extra`. Keys starting with `_` are registry-internal bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "Гос. номер", default)]
    pub plate: String,

    #[serde(rename = "Марка/модель", default)]
    pub brand_model: String,

    #[serde(rename = "Владелец", default)]
    pub owner: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Short verdict attached asynchronously after the record is shown;
    /// never part of the wire payload.
    #[serde(skip)]
    pub advisory: Option<String>,
}

impl VehicleRecord {
    /// Flatten the record into `key: value` pairs for the advisory prompt,
    /// skipping registry-internal `_` columns and empty cells.
    pub fn summary_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.plate.is_empty() {
            pairs.push(("Гос. номер".to_string(), self.plate.clone()));
        }
        if !self.brand_model.is_empty() {
            pairs.push(("Марка/модель".to_string(), self.brand_model.clone()));
        }
        if !self.owner.is_empty() {
            pairs.push(("Владелец".to_string(), self.owner.clone()));
        }
        for (key, value) in &self.extra {
            if key.starts_with('_') {
                continue;
            }
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if !rendered.is_empty() {
                pairs.push((key.clone(), rendered));
            }
        }
        pairs
    }
}

/// Exact response shape of the registry endpoint: either a result list or
/// an error with an optional machine-readable code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupReply {
    #[serde(default)]
    pub results: Vec<VehicleRecord>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Terminal classification of one lookup. This is what the session state
/// machine consumes; nothing past this point remembers HTTP.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Vec<VehicleRecord>),
    NotFound,
    Unauthorized(String),
    Failed(String),
}

impl LookupOutcome {
    /// Classify a well-formed reply body.
    pub fn from_reply(reply: LookupReply) -> Self {
        if let Some(code) = reply.code.as_deref() {
            if code.eq_ignore_ascii_case("UNAUTHORIZED") {
                let message = reply
                    .error
                    .unwrap_or_else(|| "Устройство не авторизовано в реестре.".to_string());
                return LookupOutcome::Unauthorized(message);
            }
        }
        if let Some(error) = reply.error {
            return LookupOutcome::Failed(error);
        }
        if let Some(code) = reply.code {
            // Code without message, e.g. RATE_LIMIT
            return LookupOutcome::Failed(format!("Реестр отклонил запрос: {}", code));
        }
        if reply.results.is_empty() {
            LookupOutcome::NotFound
        } else {
            LookupOutcome::Found(reply.results)
        }
    }

    /// Classify a transport or decode failure.
    pub fn from_error(err: AppError) -> Self {
        match err {
            AppError::Unauthorized(_) => LookupOutcome::Unauthorized(err.operator_message()),
            other => LookupOutcome::Failed(other.operator_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_json(json: &str) -> LookupReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_record_parses_registry_columns_and_extras() {
        let reply = reply_json(
            r#"{"results":[{"Гос. номер":"А123ВС77","Марка/модель":"LADA VESTA",
                "Владелец":"Иванов И.И.","Подразделение":"Цех 2","_rowId":17}]}"#,
        );
        let record = &reply.results[0];
        assert_eq!(record.plate, "А123ВС77");
        assert_eq!(record.brand_model, "LADA VESTA");
        assert_eq!(record.owner, "Иванов И.И.");
        assert_eq!(record.extra["Подразделение"], "Цех 2");
        assert_eq!(record.advisory, None);
    }

    #[test]
    fn test_summary_pairs_skip_internal_columns() {
        let reply = reply_json(
            r#"{"results":[{"Гос. номер":"А123ВС77","Владелец":"Иванов",
                "_rowId":17,"Пропуск":"до 2027"}]}"#,
        );
        let pairs = reply.results[0].summary_pairs();
        assert!(pairs.iter().any(|(k, _)| k == "Пропуск"));
        assert!(!pairs.iter().any(|(k, _)| k.starts_with('_')));
    }

    #[test]
    fn test_nonempty_results_classify_as_found() {
        let reply = reply_json(r#"{"results":[{"Гос. номер":"А123ВС77"}]}"#);
        assert!(matches!(LookupOutcome::from_reply(reply), LookupOutcome::Found(r) if r.len() == 1));
    }

    #[test]
    fn test_empty_results_classify_as_not_found() {
        assert_eq!(
            LookupOutcome::from_reply(reply_json(r#"{"results":[]}"#)),
            LookupOutcome::NotFound
        );
        assert_eq!(
            LookupOutcome::from_reply(reply_json(r#"{}"#)),
            LookupOutcome::NotFound
        );
    }

    #[test]
    fn test_unauthorized_code_wins_over_error_text() {
        let reply = reply_json(r#"{"error":"ключ отозван","code":"UNAUTHORIZED"}"#);
        assert_eq!(
            LookupOutcome::from_reply(reply),
            LookupOutcome::Unauthorized("ключ отозван".to_string())
        );
    }

    #[test]
    fn test_other_codes_classify_as_failed() {
        let reply = reply_json(r#"{"code":"RATE_LIMIT"}"#);
        assert!(matches!(
            LookupOutcome::from_reply(reply),
            LookupOutcome::Failed(m) if m.contains("RATE_LIMIT")
        ));
    }

    #[test]
    fn test_transport_errors_classify_as_failed_with_operator_message() {
        let outcome =
            LookupOutcome::from_error(AppError::NetworkUnavailable("dns".to_string()));
        assert!(matches!(
            outcome,
            LookupOutcome::Failed(m) if m.contains("ОТСУТСТВУЕТ ИНТЕРНЕТ")
        ));

        let outcome = LookupOutcome::from_error(AppError::Unauthorized("403".to_string()));
        assert!(matches!(outcome, LookupOutcome::Unauthorized(_)));
    }
}
