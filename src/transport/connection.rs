// src/transport/connection.rs
use serde::Serialize;
use url::Url;

/// Address of the reporting server.
///
/// The port is kept exactly as given. A value the URL layer rejects only
/// shows up later as a request that got no response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub host: String,
    pub port: i32,
    pub base_path: String,
}

impl Connection {
    pub fn new(host: impl Into<String>, port: i32, base_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            base_path: base_path.into(),
        }
    }

    /// `http://{host}:{port}{base_path}{path}`, plain concatenation of the
    /// base path and the endpoint path.
    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "http://{}:{}{}{}",
            self.host, self.port, self.base_path, path
        ))
    }
}
