// Vehicle inspection reminder service: keeps a table of inspection
// due-dates and pushes WhatsApp notifications through an external relay.

mod backend;

use anyhow::Result;
use axum::serve;
use dotenvy::dotenv;
use log::info;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use backend::config::AppConfig;
use backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.log_level),
    )
    .init();

    info!("Starting vehicle inspection reminder service...");

    let app_state = initialize_backend(&config).await?;
    let router = create_router(app_state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    info!("🌐 Starting REST API server at {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, router).await?;

    Ok(())
}
