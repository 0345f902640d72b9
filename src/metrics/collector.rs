// src/metrics/collector.rs
use crate::health::{CheckResult, Severity};
use anyhow::Result;
use chrono::{DateTime, Utc};
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

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

    pub fn gather(&self) -> Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(buffer)
    }
}

pub struct MetricsCollector {
    pub check_cycles_total: IntCounterVec,
    pub check_cycle_duration_seconds: Histogram,
    pub check_severity: IntGauge,
    pub last_check_timestamp_seconds: IntGauge,
    pub configuration_errors_total: IntCounter,
}

impl MetricsCollector {
    pub fn new(registry: &Registry) -> Result<Self> {
        let check_cycles_total = IntCounterVec::new(
            Opts::new("hdbpp_health_check_cycles_total", "Completed check cycles"),
            &["severity"],
        )?;
        registry.register(Box::new(check_cycles_total.clone()))?;

        let check_cycle_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "hdbpp_health_check_cycle_duration_seconds",
            "Check cycle duration in seconds",
        ))?;
        registry.register(Box::new(check_cycle_duration_seconds.clone()))?;

        let check_severity = IntGauge::new(
            "hdbpp_health_check_severity",
            "Latest severity (0=ok, 1=warning, 2=error, 3=connection problem)",
        )?;
        registry.register(Box::new(check_severity.clone()))?;

        let last_check_timestamp_seconds = IntGauge::new(
            "hdbpp_health_check_last_check_timestamp_seconds",
            "Unix time of the latest completed check cycle",
        )?;
        registry.register(Box::new(last_check_timestamp_seconds.clone()))?;

        let configuration_errors_total = IntCounter::new(
            "hdbpp_health_check_configuration_errors_total",
            "Check cycles refused because the check was not set up",
        )?;
        registry.register(Box::new(configuration_errors_total.clone()))?;

        // Expose every severity series from the start
        for severity in Severity::ALL {
            check_cycles_total.with_label_values(&[severity.as_str()]);
        }

        Ok(Self {
            check_cycles_total,
            check_cycle_duration_seconds,
            check_severity,
            last_check_timestamp_seconds,
            configuration_errors_total,
        })
    }

    pub fn record_cycle(&self, result: &CheckResult, duration: Duration, checked_at: DateTime<Utc>) {
        self.check_cycles_total
            .with_label_values(&[result.severity.as_str()])
            .inc();
        self.check_cycle_duration_seconds
            .observe(duration.as_secs_f64());
        self.check_severity.set(i64::from(result.severity.rank()));
        self.last_check_timestamp_seconds.set(checked_at.timestamp());
    }

    pub fn record_configuration_error(&self) {
        self.configuration_errors_total.inc();
    }
}
