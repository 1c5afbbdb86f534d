use crate::domain::foundation::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: Timestamp,
}

/// Liveness report for the domain layer.
pub fn health_check() -> HealthStatus {
    HealthStatus {
        status: HealthState::Ok,
        timestamp: Timestamp::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_ok_with_current_time() {
        let before = Timestamp::now();
        let report = health_check();
        assert_eq!(report.status, HealthState::Ok);
        assert!(!report.timestamp.is_before(&before));
    }

    #[test]
    fn serializes_status_in_lowercase() {
        let json = serde_json::to_value(health_check()).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
