// src/transport/fake.rs
use super::{Connection, EndpointResponse, StatusTransport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted transport: answers per endpoint path and remembers what was
/// requested. Unscripted paths get no response.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: HashMap<String, EndpointResponse>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), EndpointResponse::new(status, body));
        self
    }

    pub fn state(self, path: &str, state: &str) -> Self {
        let body = serde_json::json!({ "state": state }).to_string();
        self.respond(path, 200, &body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusTransport for FakeTransport {
    async fn get(&self, _connection: &Connection, path: &str) -> Option<EndpointResponse> {
        self.requests.lock().unwrap().push(path.to_string());
        self.responses.get(path).cloned()
    }
}
