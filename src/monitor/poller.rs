// src/monitor/poller.rs
use super::{CheckSnapshot, StatusBoard};
use crate::health::{ConfigError, HealthCheck, Severity};
use crate::metrics::MetricsCollector;
use crate::transport::StatusTransport;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Runs a configured [`HealthCheck`] on a fixed interval and publishes each
/// result to a [`StatusBoard`].
pub struct Monitor<T> {
    check: HealthCheck<T>,
    interval: Duration,
    board: StatusBoard,
    metrics: Option<Arc<MetricsCollector>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<T: StatusTransport + 'static> Monitor<T> {
    pub fn new(
        check: HealthCheck<T>,
        interval: Duration,
        metrics: Option<Arc<MetricsCollector>>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            check,
            interval,
            board: StatusBoard::new(),
            metrics,
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn board(&self) -> StatusBoard {
        self.board.clone()
    }

    /// Polls until [`shutdown`](Self::shutdown) is called.
    ///
    /// A configuration error ends the loop and is returned, the check will
    /// not fix itself.
    pub async fn start(self: Arc<Self>) -> Result<(), ConfigError> {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown_rx = self.shutdown_rx.clone();

        info!("Starting health monitor with interval: {:?}", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cycle().await {
                        error!("Health check is not usable: {}", e);
                        return Err(e);
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        info!("Health monitor shutting down");
                        return Ok(());
                    }
                }
            }
        }
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Runs one check cycle, records it and publishes it.
    pub async fn run_cycle(&self) -> Result<Arc<CheckSnapshot>, ConfigError> {
        let started = Instant::now();
        let result = match self.check.check_hosts().await {
            Ok(result) => result,
            Err(e) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_configuration_error();
                }
                return Err(e);
            }
        };
        let elapsed = started.elapsed();

        let snapshot = Arc::new(CheckSnapshot {
            result,
            checked_at: Utc::now(),
            duration_ms: saturating_millis(elapsed),
        });

        if let Some(metrics) = &self.metrics {
            metrics.record_cycle(&snapshot.result, elapsed, snapshot.checked_at);
        }

        let severity = snapshot.result.severity;
        let previous = self.board.publish(snapshot.clone());

        if previous.map(|p| p.result.severity) != Some(severity) {
            match severity {
                Severity::Ok => info!(%severity, "Cluster health: {}", snapshot.result.message),
                _ => warn!(%severity, "Cluster health: {}", snapshot.result.message),
            }
        } else {
            debug!(%severity, "Cluster health unchanged");
        }

        Ok(snapshot)
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
