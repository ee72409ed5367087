use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mindwell_api::config::Config;
use mindwell_api::state::AppState;
use mindwell_storage::documents::{DocumentStore, S3DocumentStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    let store: Option<Arc<dyn DocumentStore>> = match &config.database_name {
        Some(bucket) => {
            let client =
                mindwell_storage::client::build_client(config.database_url.as_deref()).await;
            tracing::info!(bucket = %bucket, "document store configured");
            Some(Arc::new(S3DocumentStore::new(client, bucket.as_str())))
        }
        None => {
            tracing::warn!("DATABASE_NAME not set, serving defaults without persistence");
            None
        }
    };

    let lambda = config.lambda;
    let port = config.port;
    let app = mindwell_api::router(AppState::new(store, config));

    if lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
