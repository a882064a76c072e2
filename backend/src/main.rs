use ecclesia_backend::{
    build_router,
    config::{Config, DEFAULT_LOG_FILTER},
    shutdown::shutdown_signal,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cfg = Config::from_env()?;
    let addr = cfg.listen_addr()?;

    let app = build_router();
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "backend listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("backend stopped");
    Ok(())
}
