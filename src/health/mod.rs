// src/health/mod.rs
mod indicator;
mod random;
mod report;
mod status;

pub use indicator::{HealthIndicator, RandomCheckIndicator, ERROR_CODE_DETAIL};
pub use random::{uniform_in_range, RandomSource, ThreadRngSource};
pub use report::{HealthReport, HealthReportBuilder};
pub use status::HealthStatus;
