use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use hotel_booking::api::{AppState, create_router};
use hotel_booking::clock::SystemClock;
use hotel_booking::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    hotel_booking::logging::init();

    let config_dir =
        std::env::var("HOTEL_CONFIG").unwrap_or_else(|_| "./config/hotel".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let state = AppState::from_config(&config, Arc::new(SystemClock))?;

    let addr = config.server().bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("hotel-booking listening on {addr}");
    info!("  config: {config_dir}");
    info!("  rooms: {}", config.rooms().len());

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("hotel-booking stopped");
    Ok(())
}
