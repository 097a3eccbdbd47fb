use crate::modules::plate::CanonicalPlate;
use crate::modules::registry::VehicleRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle of one lookup session. Exactly one value is active at a time,
/// owned exclusively by the controller task; `Idle` is both the initial
/// state and the reset target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Idle,
    Searching,
    Found,
    NotFound,
    Failed,
    Unauthorized,
}

/// Projection handed to the presentation layer on every change. The view
/// renders this and nothing else; font sizing is a separate pure call.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub records: Vec<VehicleRecord>,
    pub error_message: Option<String>,
}

impl SessionSnapshot {
    pub fn idle() -> Self {
        Self {
            status: SessionStatus::Idle,
            records: Vec::new(),
            error_message: None,
        }
    }
}

/// One accepted submit. The sequence number is strictly increasing for the
/// lifetime of the controller and fences stale responses.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub plate: CanonicalPlate,
    pub issued_at: DateTime<Utc>,
    pub sequence: u64,
}

impl LookupRequest {
    pub fn new(plate: CanonicalPlate, sequence: u64) -> Self {
        Self {
            plate,
            issued_at: Utc::now(),
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_like_the_wire_protocol() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::NotFound).unwrap(),
            "\"NOT_FOUND\""
        );
        assert_eq!(serde_json::to_string(&SessionStatus::Idle).unwrap(), "\"IDLE\"");
    }

    #[test]
    fn test_idle_snapshot_is_empty() {
        let snapshot = SessionSnapshot::idle();
        assert_eq!(snapshot.status, SessionStatus::Idle);
        assert!(snapshot.records.is_empty());
        assert!(snapshot.error_message.is_none());
    }
}
