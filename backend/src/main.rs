use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};

use health_calendar_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let data_dir = std::env::var("HEALTH_CALENDAR_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    let port: u16 = std::env::var("HEALTH_CALENDAR_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    info!("Using data directory {}", data_dir.display());
    let state = initialize_backend(&data_dir)?;
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
