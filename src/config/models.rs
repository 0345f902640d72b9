// src/config/models.rs
use crate::health::{CheckMode, DEFAULT_HEALTH_ENDPOINTS};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: RestServerConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.server.host.is_empty(), "server.host must not be empty");
        ensure!(
            !self.server.base_path.is_empty(),
            "server.base_path must not be empty"
        );

        if let ChecksConfig::Aggregate { endpoints } = &self.checks {
            ensure!(
                !endpoints.is_empty(),
                "checks.endpoints must list at least one endpoint"
            );
        }

        ensure!(self.poll.interval_secs > 0, "poll.interval_secs must be positive");
        ensure!(
            self.metrics.path.starts_with('/'),
            "metrics.path must start with '/'"
        );
        Ok(())
    }
}

/// Where the cluster reporting server lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestServerConfig {
    pub host: String,
    pub port: i32,
    pub base_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChecksConfig {
    Aggregate { endpoints: Vec<String> },
    Fixed { enabled: bool },
}

impl ChecksConfig {
    pub fn mode(&self) -> CheckMode {
        match self {
            ChecksConfig::Aggregate { endpoints } => CheckMode::Aggregate(endpoints.clone()),
            ChecksConfig::Fixed { enabled } => CheckMode::Fixed { enabled: *enabled },
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig::Aggregate {
            endpoints: DEFAULT_HEALTH_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Per request timeout. Unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_metrics_port(),
            path: default_metrics_path(),
        }
    }
}

fn default_interval_secs() -> u64 {
    60
}

fn default_metrics_port() -> u16 {
    9100
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}
