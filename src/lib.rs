use std::sync::Arc;

use crate::services::BridgeService;

pub mod configs;
pub mod errors;
pub mod models;
pub mod services;

pub use configs::Settings;

pub async fn run(settings: &Arc<Settings>) {
    let bridge = BridgeService::new(settings).expect("Failed to create bridge service.");

    tracing::info!(
        "connecting to {}:{} as {}",
        settings.gateway.host,
        settings.gateway.port,
        settings.gateway.client_id
    );

    if let Err(e) = bridge.serve().await {
        tracing::error!("bridge stopped: {}", e);
    }
}
