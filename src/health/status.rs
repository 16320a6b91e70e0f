// src/health/status.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported by a single health probe invocation.
///
/// Only `Up` and `Down` are produced by the built-in indicators;
/// `Unknown` and `OutOfService` exist by convention for callers that
/// need them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Up,
    Down,
    Unknown,
    OutOfService,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        matches!(self, HealthStatus::Up)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthStatus::Up => "UP",
            HealthStatus::Down => "DOWN",
            HealthStatus::Unknown => "UNKNOWN",
            HealthStatus::OutOfService => "OUT_OF_SERVICE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(HealthStatus::Up.to_string(), "UP");
        assert_eq!(HealthStatus::Down.to_string(), "DOWN");
        assert_eq!(HealthStatus::OutOfService.to_string(), "OUT_OF_SERVICE");
    }

    #[test]
    fn serializes_screaming_snake() {
        let json = serde_json::to_string(&HealthStatus::OutOfService).unwrap();
        assert_eq!(json, "\"OUT_OF_SERVICE\"");
    }
}
