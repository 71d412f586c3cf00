mod advice;
mod auth;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use advice::AdviceClient;
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting agri-market gateway");

    // Advice generation is optional; without an API key the endpoint
    // reports the missing configuration instead of failing startup.
    let advice = AdviceClient::from_env()?;
    let state = AppState::new(advice);

    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
