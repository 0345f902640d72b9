// src/health/messages.rs
//
// Operator facing texts. The health check can only raise awareness of a
// problem, on any warning the cluster itself has to be investigated.

use super::Severity;

pub const NO_RESPONSE: &str = "Unable to contact database cluster reporting server, \
    please check reporting server is running.";

pub const INVALID_RESPONSE: &str = "Invalid response when contacting the reporting server. \
    Ensure RestAPI configuration is correct.";

pub const SERVER_NO_ERRORS: &str = "No database cluster server/software errors reported.";

pub const SERVER_WARNING: &str = "The database cluster is reporting a warning for the physical \
    servers and/or the server software. Please check all servers and related software is \
    running and configured correctly.";

pub const SERVER_ERROR: &str = "The database cluster is reporting an error in either the \
    physical servers or the operating software. The error may signal crashed servers or failed \
    operating software that needs a rapid diagnosis or investigation";

pub const SERVER_BAD_RESPONSE: &str = "Unable to understand database cluster host state, \
    please fix so state can be reported correctly.";

/// Template opening the message of a completed check cycle.
pub fn summary(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => SERVER_NO_ERRORS,
        Severity::Warning => SERVER_WARNING,
        Severity::Error => SERVER_ERROR,
        Severity::ConnectionProblem => SERVER_BAD_RESPONSE,
    }
}
