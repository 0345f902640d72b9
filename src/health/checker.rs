// src/health/checker.rs
use super::{CheckResult, ConfigError, EndpointReport, Severity};
use crate::transport::{Connection, HttpTransport, StatusTransport, TransportError};
use std::time::Duration;
use tracing::{debug, debug_span, Instrument};
use uuid::Uuid;

/// Endpoint polled when running in fixed mode.
pub const SERVERS_HEALTH_ENDPOINT: &str = "/health/servers";

/// Health endpoints published by the cluster reporting server.
pub const DEFAULT_HEALTH_ENDPOINTS: [&str; 4] = [
    SERVERS_HEALTH_ENDPOINT,
    "/health/database/ttl",
    "/health/database/tables",
    "/health/database/backup",
];

/// Which endpoints a check cycle visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMode {
    /// Every endpoint in the list, in order. An empty list cannot be checked.
    Aggregate(Vec<String>),
    /// Only [`SERVERS_HEALTH_ENDPOINT`], and only once enabled.
    Fixed { enabled: bool },
}

impl CheckMode {
    fn endpoints(&self) -> Result<Vec<&str>, ConfigError> {
        match self {
            CheckMode::Aggregate(paths) if paths.is_empty() => Err(ConfigError::NoEndpoints),
            CheckMode::Aggregate(paths) => Ok(paths.iter().map(String::as_str).collect()),
            CheckMode::Fixed { enabled: true } => Ok(vec![SERVERS_HEALTH_ENDPOINT]),
            CheckMode::Fixed { enabled: false } => Err(ConfigError::HostChecksDisabled),
        }
    }
}

impl Default for CheckMode {
    fn default() -> Self {
        CheckMode::Aggregate(Vec::new())
    }
}

/// Polls the reporting server's health endpoints and folds their answers
/// into one verdict.
///
/// Call [`configure`](Self::configure) first and only go on if it returned
/// `true`. Note that a failed probe still leaves the address stored, so a
/// later `check_hosts` will run against it rather than refuse.
pub struct HealthCheck<T = HttpTransport> {
    transport: T,
    connection: Option<Connection>,
    mode: CheckMode,
}

impl HealthCheck<HttpTransport> {
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(timeout)?))
    }
}

impl<T: StatusTransport> HealthCheck<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            connection: None,
            mode: CheckMode::default(),
        }
    }

    /// Stores the reporting server address and probes `base_path + "/"`.
    ///
    /// Returns `false` without touching the network when `host` or
    /// `base_path` is empty. Otherwise returns whether anything answered
    /// the probe, whatever the HTTP status.
    pub async fn configure(&mut self, host: &str, port: i32, base_path: &str) -> bool {
        if host.is_empty() || base_path.is_empty() {
            return false;
        }

        let connection = Connection::new(host, port, base_path);
        let probe = self.transport.get(&connection, "/").await;
        self.connection = Some(connection);

        match probe {
            Some(response) => {
                debug!(host, port, base_path, status = response.status, "reporting server answered probe");
                true
            }
            None => {
                debug!(host, port, base_path, "reporting server did not answer probe");
                false
            }
        }
    }

    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    pub fn mode(&self) -> &CheckMode {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: CheckMode) {
        self.mode = mode;
    }

    /// Switches to aggregate mode over `endpoints`.
    pub fn set_endpoints<I, S>(&mut self, endpoints: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mode = CheckMode::Aggregate(endpoints.into_iter().map(Into::into).collect());
    }

    /// Switches to fixed mode on [`SERVERS_HEALTH_ENDPOINT`].
    pub fn enable_host_checks(&mut self, enable: bool) {
        self.mode = CheckMode::Fixed { enabled: enable };
    }

    /// Runs one check cycle.
    ///
    /// Endpoints are visited one after the other. The first endpoint that
    /// does not answer with 200, or whose body cannot be understood, ends
    /// the cycle with [`Severity::ConnectionProblem`]. Otherwise the result
    /// carries the worst reported severity and the endpoint messages in
    /// visiting order.
    ///
    /// `Err` is only returned when the check has not been set up.
    pub async fn check_hosts(&self) -> Result<CheckResult, ConfigError> {
        let connection = self.connection.as_ref().ok_or(ConfigError::NotConfigured)?;
        let endpoints = self.mode.endpoints()?;

        let span = debug_span!("check_cycle", cycle_id = %Uuid::new_v4(), endpoints = endpoints.len());
        Ok(self.run_cycle(connection, &endpoints).instrument(span).await)
    }

    async fn run_cycle(&self, connection: &Connection, endpoints: &[&str]) -> CheckResult {
        let mut severity = Severity::Ok;
        let mut details = String::new();

        for &path in endpoints {
            let response = match self.transport.get(connection, path).await {
                Some(response) if response.status == 200 => response,
                Some(response) => {
                    debug!(path, status = response.status, "endpoint did not return 200, aborting cycle");
                    return CheckResult::no_response();
                }
                None => {
                    debug!(path, "endpoint did not respond, aborting cycle");
                    return CheckResult::no_response();
                }
            };

            let Some(report) = EndpointReport::parse(&response.body) else {
                debug!(path, "endpoint returned an unusable body, aborting cycle");
                return CheckResult::invalid_response();
            };

            if let Some(message) = &report.message {
                details.push('\n');
                details.push_str(message);
            }

            debug!(path, reported = %report.severity, "endpoint state");
            severity = severity.worst(report.severity);
        }

        CheckResult::summarize(severity, &details)
    }
}
