//! Binary entrypoint for the listkeeper HTTP server.
//!
//! Configuration comes from environment variables, see [`ServerConfig`].
//! The store is opened and pinged once before the listener binds and is
//! released once after the server has shut down.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use listkeeper_server::config::ServerConfig;
use listkeeper_server::router::build_router;
use listkeeper_server::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("listkeeper: {err}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to open list store: {0}")]
    Store(#[from] listkeeper_store::StoreError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let state = AppState::from_config(&config)?;
    tracing::info!("store connection ok");

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(debug = config.debug, "listkeeper server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("server stopped, store connection released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
