use std::time::Duration;

use crate::error::BridgeError;
use crate::pattern::StatusSnapshot;

#[derive(Debug, Clone)]
pub struct StatusClient {
    client: reqwest::Client,
    url: String,
}

impl StatusClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BridgeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Non 2xx answers are errors.
    pub async fn fetch(&self) -> Result<StatusSnapshot, BridgeError> {
        let snapshot = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<StatusSnapshot>()
            .await?;

        Ok(snapshot)
    }
}
