use label_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Set up environment (dotenv, logging)
    setup_environment()?;

    tracing::info!("🏷️ Label server starting...");

    // 2. Load configuration
    let config = Config::from_env();
    if config.is_production() {
        tracing::info!("Running in production mode");
    }

    // 3. Start HTTP server
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
