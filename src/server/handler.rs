// src/server/handler.rs
use crate::metrics::MetricsRegistry;
use crate::monitor::StatusBoard;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;
use tower::Service;

pub const STATUS_PATH: &str = "/status";

/// Answers `GET {metrics_path}` with prometheus text and `GET /status` with
/// the latest check as JSON.
#[derive(Clone)]
pub struct ExporterHandler {
    registry: Arc<MetricsRegistry>,
    board: StatusBoard,
    metrics_path: Arc<str>,
}

impl ExporterHandler {
    pub fn new(registry: Arc<MetricsRegistry>, board: StatusBoard, metrics_path: &str) -> Self {
        Self {
            registry,
            board,
            metrics_path: Arc::from(metrics_path),
        }
    }

    pub fn respond(&self, req: &Request<Body>) -> Response<Body> {
        if req.method() != &Method::GET {
            return plain(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        }

        let path = req.uri().path();
        if path == &*self.metrics_path {
            match self.registry.gather() {
                Ok(metrics) => with_type(
                    Response::new(Body::from(metrics)),
                    "text/plain; version=0.0.4",
                ),
                Err(e) => {
                    tracing::error!("Failed to encode metrics: {}", e);
                    plain(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                }
            }
        } else if path == STATUS_PATH {
            let Some(snapshot) = self.board.latest() else {
                return plain(StatusCode::SERVICE_UNAVAILABLE, "No check has completed yet");
            };
            match serde_json::to_vec(&*snapshot) {
                Ok(json) => with_type(Response::new(Body::from(json)), "application/json"),
                Err(e) => {
                    tracing::error!("Failed to encode status: {}", e);
                    plain(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                }
            }
        } else {
            plain(StatusCode::NOT_FOUND, "Not Found")
        }
    }
}

fn with_type(mut response: Response<Body>, content_type: &'static str) -> Response<Body> {
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

fn plain(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut response = with_type(Response::new(Body::from(body)), "text/plain");
    *response.status_mut() = status;
    response
}

impl Service<Request<Body>> for ExporterHandler {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = futures::future::BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let response = self.respond(&req);
        Box::pin(async move { Ok(response) })
    }
}
