// src/health/error.rs

/// The check was called before it was set up. Fix the call order, retrying
/// will not help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Attempting to check hosts before the reporting server address has been configured")]
    NotConfigured,

    #[error("Attempting to check hosts when no endpoints have been configured")]
    NoEndpoints,

    #[error("Attempting to check hosts when it has not been configured")]
    HostChecksDisabled,
}
