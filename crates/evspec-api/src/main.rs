//! # evspec-api — Binary Entry Point
//!
//! Starts the Axum HTTP server: resolves configuration, preloads the
//! specification directory when it already has documents, and serves
//! until an interrupt signal triggers graceful shutdown.

use std::future::IntoFuture;

use evspec_api::{app, AppConfig, AppState};
use evspec_repo::SpecSourceClient;
use evspec_schema::SpecStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::resolve().map_err(|e| {
        tracing::error!("configuration error: {e}");
        anyhow::anyhow!(e)
    })?;

    // The remote source is optional: without it the refresh endpoint
    // fails with a client error, but validation still runs against
    // whatever the spec directory already holds.
    let source = match SpecSourceClient::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!("spec source not configured: {e}. GET /v1/api-spec will fail.");
            None
        }
    };

    // Preload the spec directory; an empty or missing directory is not
    // fatal at boot — validation reports it per request until a refresh
    // populates the store.
    let store = match SpecStore::from_directory(&config.spec_dir) {
        Ok(store) => {
            tracing::info!(
                documents = store.document_count(),
                dir = %config.spec_dir.display(),
                "specification store preloaded"
            );
            store
        }
        Err(e) => {
            tracing::warn!("specification preload failed: {e}");
            SpecStore::default()
        }
    };

    let port = config.port;
    let shutdown_timeout = std::time::Duration::from_secs(config.shutdown_timeout_secs);
    let state = AppState::new(config, source, store);
    let router = app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("evspec API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown with a bounded drain: once the signal lands,
    // in-flight requests get `shutdown_timeout` to finish before the
    // server future is dropped.
    let (drained_tx, drained_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = drained_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result?,
        _ = async {
            let _ = drained_rx.await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            tracing::warn!("shutdown grace period elapsed; dropping in-flight requests");
        }
    }

    tracing::info!("server exited");
    Ok(())
}

/// Resolves when SIGINT (or SIGTERM on unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("cannot install interrupt handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("cannot install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
