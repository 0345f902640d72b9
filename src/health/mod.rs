mod checker;
mod error;
pub mod messages;
mod report;
mod severity;

pub use checker::{CheckMode, HealthCheck, DEFAULT_HEALTH_ENDPOINTS, SERVERS_HEALTH_ENDPOINT};
pub use error::ConfigError;
pub use report::{CheckResult, EndpointReport};
pub use severity::Severity;
