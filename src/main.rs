// src/main.rs
use anyhow::{bail, Result};
use hdbpp_health_check::{
    config,
    health::HealthCheck,
    metrics::MetricsRegistry,
    monitor::Monitor,
    server::{Exporter, ExporterHandler},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hdbpp_health_check=debug".parse()?)
                .add_directive("hyper=info".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let mut check = HealthCheck::new(config.poll.timeout())?;
    let server = &config.server;
    if !check
        .configure(&server.host, server.port, &server.base_path)
        .await
    {
        bail!(
            "Unable to contact reporting server at {}:{}{}",
            server.host,
            server.port,
            server.base_path
        );
    }
    check.set_mode(config.checks.mode());
    info!(
        "Reporting server {}:{}{} answered, checking {:?}",
        server.host,
        server.port,
        server.base_path,
        check.mode()
    );

    let metrics_registry = Arc::new(MetricsRegistry::new()?);
    let monitor = Arc::new(Monitor::new(
        check,
        config.poll.interval(),
        Some(metrics_registry.collector()),
    ));

    // Start metrics exporter if enabled
    if config.metrics.enabled {
        let addr: SocketAddr = ([0, 0, 0, 0], config.metrics.port).into();
        let handler =
            ExporterHandler::new(metrics_registry, monitor.board(), &config.metrics.path);
        let exporter = Exporter::bind(addr, handler)?;
        info!(
            "Exporting metrics on http://{}{}",
            addr, config.metrics.path
        );

        tokio::spawn(async move {
            if let Err(e) = exporter.serve().await {
                error!("Metrics server error: {:#}", e);
            }
        });
    }

    let mut poller = tokio::spawn(monitor.clone().start());

    tokio::select! {
        outcome = &mut poller => {
            outcome??;
        }
        _ = shutdown_signal() => {
            monitor.shutdown();
            poller.await??;
        }
    }

    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
