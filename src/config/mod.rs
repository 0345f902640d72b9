// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    );
    parse_config(&contents, is_yaml)
}

pub fn parse_config(contents: &str, is_yaml: bool) -> Result<Config> {
    let config: Config = if is_yaml {
        serde_yaml::from_str(contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(contents).context("Failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::CheckMode;

    const YAML: &str = r#"
server:
  host: db-report
  port: 10666
  base_path: /api/v1
checks:
  mode: aggregate
  endpoints:
    - /health/servers
    - /health/database/ttl
poll:
  interval_secs: 30
  timeout_secs: 5
metrics:
  enabled: true
  port: 9100
"#;

    #[test]
    fn test_parse_yaml() {
        let config = parse_config(YAML, true).unwrap();
        assert_eq!(config.server.host, "db-report");
        assert_eq!(config.server.port, 10666);
        assert_eq!(
            config.checks.mode(),
            CheckMode::Aggregate(vec![
                "/health/servers".to_string(),
                "/health/database/ttl".to_string()
            ])
        );
        assert_eq!(config.poll.interval().as_secs(), 30);
        assert_eq!(config.poll.timeout().map(|t| t.as_secs()), Some(5));
        assert_eq!(config.metrics.path, "/metrics");
    }

    #[test]
    fn test_parse_json_fixed_mode_with_defaults() {
        let json = r#"{
            "server": {"host": "localhost", "port": 8080, "base_path": "/api"},
            "checks": {"mode": "fixed", "enabled": true}
        }"#;
        let config = parse_config(json, false).unwrap();
        assert_eq!(config.checks.mode(), CheckMode::Fixed { enabled: true });
        assert_eq!(config.poll.interval_secs, 60);
        assert_eq!(config.poll.timeout(), None);
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn test_default_checks_poll_known_endpoints() {
        let json = r#"{"server": {"host": "h", "port": 1, "base_path": "/b"}}"#;
        let config = parse_config(json, false).unwrap();
        match config.checks.mode() {
            CheckMode::Aggregate(endpoints) => assert_eq!(endpoints.len(), 4),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let empty_host = r#"{"server": {"host": "", "port": 1, "base_path": "/b"}}"#;
        assert!(parse_config(empty_host, false).is_err());

        let no_endpoints = r#"{
            "server": {"host": "h", "port": 1, "base_path": "/b"},
            "checks": {"mode": "aggregate", "endpoints": []}
        }"#;
        assert!(parse_config(no_endpoints, false).is_err());

        let zero_interval = r#"{
            "server": {"host": "h", "port": 1, "base_path": "/b"},
            "poll": {"interval_secs": 0}
        }"#;
        assert!(parse_config(zero_interval, false).is_err());
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!("hdbpp-health-check-{}.yml", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, YAML).await.unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.server.base_path, "/api/v1");

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
