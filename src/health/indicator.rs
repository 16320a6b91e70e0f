// src/health/indicator.rs
use crate::health::random::{uniform_in_range, RandomSource, ThreadRngSource};
use crate::health::{HealthReport, HealthStatus};
use tracing::debug;

pub const ERROR_CODE_DETAIL: &str = "Error Code";

/// A named probe reporting the liveness of one subsystem.
///
/// `health()` takes no input and cannot fail; an unhealthy subsystem is
/// reported as data (`Down` plus details), never as an error. Implementors
/// must be callable concurrently and must not block, since the registry
/// sits on the hot monitoring path.
pub trait HealthIndicator: Send + Sync {
    fn health(&self) -> HealthReport;
}

/// Stand-in indicator whose check is a uniform random draw over an
/// inclusive integer range. A non-zero code means the monitored
/// subsystem is down, with the code surfaced as a detail.
pub struct RandomCheckIndicator {
    source: Box<dyn RandomSource>,
    start: i64,
    end: i64,
}

impl RandomCheckIndicator {
    pub fn new(start: i64, end: i64) -> Self {
        Self::with_source(Box::new(ThreadRngSource), start, end)
    }

    pub fn with_source(source: Box<dyn RandomSource>, start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        Self { source, start, end }
    }

    fn check(&self) -> i64 {
        uniform_in_range(self.source.as_ref(), self.start, self.end)
    }
}

impl Default for RandomCheckIndicator {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl HealthIndicator for RandomCheckIndicator {
    fn health(&self) -> HealthReport {
        let error_code = self.check();
        debug!(error_code, "random check complete");

        if error_code != 0 {
            return HealthReport::down()
                .with_detail(ERROR_CODE_DETAIL, error_code)
                .build();
        }
        HealthReport::up().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    struct FixedSource(f64);

    impl RandomSource for FixedSource {
        fn next_unit(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn zero_code_reports_up_with_empty_details() {
        let indicator =
            RandomCheckIndicator::with_source(Box::new(FixedSource(0.0)), 0, 1);
        let report = indicator.health();

        assert_eq!(report.health_status(), HealthStatus::Up);
        assert!(report.details().is_empty());
    }

    #[test]
    fn nonzero_code_reports_down_with_error_code() {
        let indicator =
            RandomCheckIndicator::with_source(Box::new(FixedSource(0.99)), 0, 1);
        let report = indicator.health();

        assert_eq!(report.health_status(), HealthStatus::Down);
        assert_eq!(report.details()[ERROR_CODE_DETAIL], Value::from(1));
    }

    #[test]
    fn detail_carries_exact_code_for_wider_range() {
        let indicator =
            RandomCheckIndicator::with_source(Box::new(FixedSource(0.5)), 0, 9);
        let report = indicator.health();

        assert_eq!(report.health_status(), HealthStatus::Down);
        assert_eq!(report.details()[ERROR_CODE_DETAIL], Value::from(5));
    }

    #[test]
    fn report_is_internally_consistent() {
        let indicator = RandomCheckIndicator::default();
        for _ in 0..100 {
            let report = indicator.health();
            assert_eq!(report.is_up(), report.details().is_empty());
        }
    }
}
