// src/lib.rs
//! Health check client for a database cluster reporting server.
//!
//! [`health::HealthCheck`] polls the server's health endpoints and reduces
//! their answers to a single [`health::Severity`] and message. The
//! remaining modules run it as a standalone daemon.

pub mod config;
pub mod health;
pub mod metrics;
pub mod monitor;
pub mod server;
pub mod transport;

pub use health::{CheckMode, CheckResult, ConfigError, HealthCheck, Severity};
