// src/metrics/collector.rs
use crate::health::{HealthReport, HealthStatus};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::Instant;
use anyhow::Result;

pub struct MetricsRegistry {
    registry: Registry,
    collector: Arc<MetricsCollector>,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let collector = Arc::new(MetricsCollector::new(&registry)?);

        Ok(Self {
            registry,
            collector,
        })
    }

    pub fn collector(&self) -> Arc<MetricsCollector> {
        self.collector.clone()
    }

    pub fn gather(&self) -> Vec<u8> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        buffer
    }
}

pub struct MetricsCollector {
    pub checks_total: IntCounterVec,
    pub check_duration_seconds: HistogramVec,
    pub indicator_status: IntGaugeVec,
}

impl MetricsCollector {
    pub fn new(registry: &Registry) -> Result<Self> {
        let checks_total = IntCounterVec::new(
            Opts::new("probe_checks_total", "Total probe invocations"),
            &["indicator", "status"],
        )?;
        registry.register(Box::new(checks_total.clone()))?;

        let check_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "probe_check_duration_seconds",
                "Probe invocation duration in seconds",
            ),
            &["indicator"],
        )?;
        registry.register(Box::new(check_duration_seconds.clone()))?;

        let indicator_status = IntGaugeVec::new(
            Opts::new(
                "probe_indicator_status",
                "Last reported status (1=up, 0=down, -1=other)",
            ),
            &["indicator"],
        )?;
        registry.register(Box::new(indicator_status.clone()))?;

        Ok(Self {
            checks_total,
            check_duration_seconds,
            indicator_status,
        })
    }

    pub fn record_report(
        &self,
        indicator: &str,
        report: &HealthReport,
        duration: std::time::Duration,
    ) {
        let status = report.health_status().to_string();
        self.checks_total
            .with_label_values(&[indicator, &status])
            .inc();

        self.check_duration_seconds
            .with_label_values(&[indicator])
            .observe(duration.as_secs_f64());

        let value = match report.health_status() {
            HealthStatus::Up => 1,
            HealthStatus::Down => 0,
            _ => -1,
        };
        self.indicator_status
            .with_label_values(&[indicator])
            .set(value);
    }
}

// Helper for timing operations
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
