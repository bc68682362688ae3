// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0

//! Foreground service runner

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use patron_core::application::repository_factory::create_client_repository;
use patron_core::application::{
    StandardCreateClientUseCase, StandardListClientsUseCase, StandardSearchClientsUseCase,
    StandardUpdateClientUseCase,
};
use patron_core::domain::config::ServiceConfig;
use patron_core::domain::services::{DocumentSynchronizer, NotificationSender};
use patron_core::infrastructure::chaos::ChaosPolicy;
use patron_core::infrastructure::docsync::SimulatedDocSynchronizer;
use patron_core::infrastructure::notification::SimulatedNotificationSender;
use patron_core::infrastructure::seed::seed_demo_clients;
use patron_core::presentation::{app, AppState};

pub async fn run(config_path: Option<PathBuf>) -> Result<()> {
    // Load configuration
    let config =
        ServiceConfig::load_or_default(config_path).context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    // Optional Prometheus exporter
    if config.observability.metrics_enabled {
        let metrics_addr =
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.observability.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()
            .context("Failed to start metrics exporter")?;
        info!("Metrics exporter listening on {}", metrics_addr);
    }

    // Initialize storage
    let backend = config.storage_backend()?;
    let repository = create_client_repository(&backend).await?;

    if config.seeding.enabled {
        seed_demo_clients(repository.as_ref())
            .await
            .context("Failed to seed demo clients")?;
    }

    // Simulated collaborators share one chaos policy
    let chaos = ChaosPolicy::from_config(&config.chaos);
    let notifier: Arc<dyn NotificationSender> =
        Arc::new(SimulatedNotificationSender::new(chaos.clone()));
    let doc_synchronizer: Arc<dyn DocumentSynchronizer> =
        Arc::new(SimulatedDocSynchronizer::new(chaos));

    let state = AppState {
        list_clients: Arc::new(StandardListClientsUseCase::new(repository.clone())),
        search_clients: Arc::new(StandardSearchClientsUseCase::new(repository.clone())),
        create_client: Arc::new(StandardCreateClientUseCase::new(repository.clone())),
        update_client: Arc::new(StandardUpdateClientUseCase::new(
            repository,
            notifier,
            doc_synchronizer,
        )),
        start_time: Instant::now(),
    };

    // Build HTTP router
    let router = app(state, &config.server.allowed_origin)?;

    // Start HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Patron directory listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Service shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
