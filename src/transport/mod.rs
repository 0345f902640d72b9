// src/transport/mod.rs
mod connection;
mod http;
#[cfg(test)]
pub(crate) mod fake;

pub use connection::Connection;
pub use http::{HttpTransport, TransportError};

use async_trait::async_trait;

/// Raw answer of the reporting server to one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues GET requests against the reporting server.
///
/// `None` means nothing answered: connection refused, DNS failure, timeout
/// or an address that cannot be turned into a URL. Any HTTP status,
/// including errors, is a response.
#[async_trait]
pub trait StatusTransport: Send + Sync {
    async fn get(&self, connection: &Connection, path: &str) -> Option<EndpointResponse>;
}
