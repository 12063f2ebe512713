use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use appraise::config::ServerConfig;
use appraise::http::{AppState, app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env();
    let router = app(AppState::new());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "appraise listening");

    axum::serve(listener, router).await?;

    Ok(())
}
