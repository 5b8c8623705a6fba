use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::error::BridgeError;
use crate::pattern::Pattern;
use crate::services::{Connector, PatternSink, StatusClient};

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Pause between two polls
    pub poll_interval: Duration,
    /// Wait after opening the port
    pub startup_delay: Duration,
    /// Wait after writing a pattern
    pub settle_delay: Duration,
}

/// Polls the status API and mirrors the load labels onto the serial device.
pub struct Bridge<C> {
    client: StatusClient,
    connector: C,
    sink: Option<Box<dyn PatternSink>>,
    timing: Timing,
}

impl<C: Connector> Bridge<C> {
    pub fn new(client: StatusClient, connector: C, timing: Timing) -> Self {
        Self {
            client,
            connector,
            sink: None,
            timing,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    pub async fn connect(&mut self) -> Result<(), BridgeError> {
        let sink = self.connector.open()?;

        // The board resets when the port opens.
        sleep(self.timing.startup_delay).await;
        self.sink = Some(sink);

        tracing::info!("connected to {}", self.connector.target());

        Ok(())
    }

    /// One fetch and write. A disconnected bridge first tries to reopen the
    /// port and skips the cycle if that fails.
    pub async fn poll_once(&mut self) -> Result<Pattern, BridgeError> {
        if self.sink.is_none() {
            if let Err(e) = self.connect().await {
                tracing::debug!("reconnect to {} failed: {}", self.connector.target(), e);
                return Err(BridgeError::Disconnected);
            }
        }

        tracing::debug!("fetching status from {}", self.client.url());
        let snapshot = self.client.fetch().await?;
        tracing::debug!("received status: {:?}", snapshot.status);

        let pattern = Pattern::from_snapshot(&snapshot);
        tracing::debug!("sending pattern {}", pattern);

        let sink = self.sink.as_mut().ok_or(BridgeError::Disconnected)?;
        if let Err(e) = sink.write_pattern(&pattern) {
            self.sink = None;
            return Err(e);
        }

        sleep(self.timing.settle_delay).await;
        tracing::info!("pattern {} sent", pattern);

        Ok(pattern)
    }

    /// Polls until `shutdown` resolves. Errors are logged and never stop the loop.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        // A failed first open waits one interval before the next attempt.
        let mut skip_poll = false;
        if let Err(e) = self.connect().await {
            tracing::error!("unable to connect to {}: {}", self.connector.target(), e);
            skip_poll = true;
        }

        tokio::pin!(shutdown);

        loop {
            if !std::mem::take(&mut skip_poll) {
                match self.poll_once().await {
                    Ok(_) => {}
                    Err(BridgeError::Disconnected) => {
                        tracing::warn!("serial port not connected, skipping data transmission")
                    }
                    Err(e @ BridgeError::Api(_)) => tracing::error!("{}", e),
                    Err(e) => tracing::error!("{}, check the device connection", e),
                }
            }

            tokio::select! {
                _ = sleep(self.timing.poll_interval) => {}
                _ = &mut shutdown => break,
            }
        }

        tracing::info!("bridge stopped");
    }
}
