// src/server/exporter.rs
use super::ExporterHandler;
use anyhow::{Context, Result};
use hyper::service::make_service_fn;
use hyper::Server;
use std::convert::Infallible;
use std::net::{SocketAddr, TcpListener};

/// Bound exporter socket, ready to serve [`ExporterHandler`].
pub struct Exporter {
    listener: TcpListener,
    handler: ExporterHandler,
}

impl Exporter {
    pub fn bind(addr: SocketAddr, handler: ExporterHandler) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .with_context(|| format!("Failed to bind exporter on {}", addr))?;
        listener.set_nonblocking(true)?;
        Ok(Self { listener, handler })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until the listener fails. Must run inside the tokio runtime.
    pub async fn serve(self) -> Result<()> {
        let addr = self.local_addr()?;
        let handler = self.handler;
        let make_service = make_service_fn(move |_conn| {
            let handler = handler.clone();
            async move { Ok::<_, Infallible>(handler) }
        });

        tracing::info!("Exporter listening on {}", addr);
        Server::from_tcp(self.listener)?
            .serve(make_service)
            .await
            .context("Exporter stopped")
    }
}
