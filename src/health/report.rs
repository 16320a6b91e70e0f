// src/health/report.rs
use crate::health::HealthStatus;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of one probe invocation: a status plus optional structured
/// details. Built fresh per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    status: HealthStatus,
    details: BTreeMap<String, Value>,
}

impl HealthReport {
    pub fn status(status: HealthStatus) -> HealthReportBuilder {
        HealthReportBuilder {
            status,
            details: BTreeMap::new(),
        }
    }

    pub fn up() -> HealthReportBuilder {
        Self::status(HealthStatus::Up)
    }

    pub fn down() -> HealthReportBuilder {
        Self::status(HealthStatus::Down)
    }

    pub fn unknown() -> HealthReportBuilder {
        Self::status(HealthStatus::Unknown)
    }

    pub fn health_status(&self) -> HealthStatus {
        self.status
    }

    pub fn details(&self) -> &BTreeMap<String, Value> {
        &self.details
    }

    pub fn is_up(&self) -> bool {
        self.status.is_up()
    }
}

/// Builder for [`HealthReport`], mirroring the fluent
/// `down().with_detail(..).build()` shape monitoring code expects.
#[derive(Debug, Clone)]
pub struct HealthReportBuilder {
    status: HealthStatus,
    details: BTreeMap<String, Value>,
}

impl HealthReportBuilder {
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> HealthReport {
        HealthReport {
            status: self.status,
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_report_has_no_details() {
        let report = HealthReport::up().build();
        assert_eq!(report.health_status(), HealthStatus::Up);
        assert!(report.details().is_empty());
    }

    #[test]
    fn details_accept_mixed_scalar_types() {
        let report = HealthReport::down()
            .with_detail("Error Code", 7)
            .with_detail("reason", "connection refused")
            .build();

        assert_eq!(report.details()["Error Code"], Value::from(7));
        assert_eq!(report.details()["reason"], Value::from("connection refused"));
    }

    #[test]
    fn serializes_status_and_details() {
        let report = HealthReport::down().with_detail("Error Code", 1).build();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "DOWN");
        assert_eq!(json["details"]["Error Code"], 1);
    }
}
