use anyhow::Context as _;
use api::db::PgStore;
use api::AppState;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::database::connection_pool;
use crate::settings::Settings;

/// Connect to the database and serve the API until a shutdown signal arrives.
pub async fn launch(settings: Settings) -> anyhow::Result<()> {
    let pool = connection_pool(&settings.database).await?;
    tracing::info!(
        "Connected to database {} on {}:{}",
        settings.database.database,
        settings.database.host,
        settings.database.port
    );

    let state = AppState::new(PgStore::new(pool));
    let router = api::router(state).layer(TraceLayer::new_for_http());

    let addr = settings
        .server
        .addr()
        .context("Invalid server listen address")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
