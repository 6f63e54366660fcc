use logwindow_core::config::CoreConfig;
use logwindow_core::errors::LogWindowError;
use logwindow_core::logging;
use logwindow_service::{start_service, Dataset};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    if let Err(err) = logging::init_tracing(None) {
        eprintln!("failed to initialise tracing: {err}");
    }

    let config = load_service_config()?;
    let dataset = Dataset::load(config.dataset_path()).map_err(ServerError::Dataset)?;
    info!(
        node = %config.node_name,
        environment = ?config.environment,
        "dataset ready"
    );

    let handle = start_service(config.http_bind(), dataset)
        .await
        .map_err(ServerError::Server)?;

    shutdown_signal().await;
    info!("shutdown requested, draining connections");
    handle.shutdown().await;

    Ok(())
}

fn load_service_config() -> Result<CoreConfig, LogWindowError> {
    CoreConfig::from_env_with_prefix("SHOW_LOGS_")
        .or_else(|_| CoreConfig::from_env())
        .map_err(Into::into)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] LogWindowError),
    #[error("failed to load dataset: {0}")]
    Dataset(#[source] LogWindowError),
    #[error("http server error: {0}")]
    Server(#[source] anyhow::Error),
}
