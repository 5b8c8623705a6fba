use anyhow::Context;

use crate::bridge::{Bridge, Timing};
use crate::configs::Settings;
use crate::services::{SerialService, StatusClient};

pub mod bridge;
pub mod configs;
pub mod error;
pub mod pattern;
pub mod services;

pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let client = StatusClient::new(&settings.bridge.status_url, settings.bridge.request_timeout())
        .context("Failed to build HTTP client")?;

    let timing = Timing {
        poll_interval: settings.bridge.poll_interval(),
        startup_delay: settings.serial.startup_delay(),
        settle_delay: settings.serial.settle_delay(),
    };

    tracing::info!(
        "bridging {} every {:?}",
        settings.bridge.status_url,
        timing.poll_interval
    );

    Bridge::new(client, SerialService::new(settings.serial.clone()), timing)
        .run(shutdown_signal())
        .await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
