/**
 * entrybox Server Entry Point
 *
 * Reads configuration from the environment (and `.env` if present),
 * connects to MongoDB and serves the HTTP API on `0.0.0.0:$SERVER_PORT`.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use entrybox::backend::server::config::ServerConfig;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env()
        .and_then(|config| config.validate().map(|_| config))
        .map_err(|e| {
            tracing::error!("Invalid configuration: {}", e);
            e
        })?;

    tracing::debug!("Loaded configuration: {:?}", config);

    let app = entrybox::backend::create_app(&config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin entrybox-server --features ssr");
    std::process::exit(1);
}
