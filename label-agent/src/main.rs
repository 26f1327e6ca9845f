use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

const DEFAULT_AGENT_PORT: u16 = 9200;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("AGENT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_AGENT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🖨️ Print agent listening on {}", addr);

    axum::serve(listener, label_agent::router().into_make_service()).await?;

    Ok(())
}
