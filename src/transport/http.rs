// src/transport/http.rs
use super::{Connection, EndpointResponse, StatusTransport};
use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// reqwest backed transport. Requests are plain HTTP, one at a time.
///
/// Redirects are never followed: a 3xx is the answer of the endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Without a timeout a request waits as long as the OS lets it.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Uses `client` as is, including its redirect policy.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusTransport for HttpTransport {
    async fn get(&self, connection: &Connection, path: &str) -> Option<EndpointResponse> {
        let url = match connection.url_for(path) {
            Ok(url) => url,
            Err(e) => {
                debug!(host = %connection.host, port = connection.port, path, "cannot build url: {}", e);
                return None;
            }
        };

        let response = match self.client.get(url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(%url, "request failed: {}", e);
                return None;
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => {
                trace!(%url, status, %body, "endpoint answered");
                Some(EndpointResponse::new(status, body))
            }
            Err(e) => {
                debug!(%url, status, "failed to read response body: {}", e);
                None
            }
        }
    }
}
