use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use todo_server::config::Config;
use todo_server::{logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config).context("failed to initialise logging")?;

    let state = AppState::in_memory();
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server ({}) running on http://{addr}", config.environment);

    todo_server::serve(listener, state.clone(), shutdown_signal(config.shutdown_grace())).await?;
    state.shutdown().await?;
    info!("server closed");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM, then arms a forced exit in case draining
/// outlives `grace`.
async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
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
    info!("shutdown signal received, shutting down");

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        error!(grace_secs = grace.as_secs(), "graceful shutdown timed out, forcing exit");
        std::process::exit(1);
    });
}
