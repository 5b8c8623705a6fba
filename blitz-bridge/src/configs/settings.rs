use std::env;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bridge {
    /// Full URL of the status endpoint
    pub status_url: String,
    /// Pause between two polls
    pub poll_interval_ms: u64,
    /// Upper bound for one status request
    pub request_timeout_ms: u64,
}

impl Bridge {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self {
            status_url: "http://127.0.0.1:5000/api/status".to_string(),
            poll_interval_ms: 2000,
            request_timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Serial {
    /// Device path; the first port the OS reports when unset
    pub port_path: Option<String>,
    pub baud_rate: u32,
    pub read_timeout_ms: u64,
    /// Wait after opening while the board resets
    pub startup_delay_ms: u64,
    /// Wait after each write
    pub settle_delay_ms: u64,
}

impl Serial {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for Serial {
    fn default() -> Self {
        Self {
            port_path: None,
            baud_rate: 9600,
            read_timeout_ms: 1000,
            startup_delay_ms: 2000,
            settle_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub bridge: Bridge,
    pub serial: Serial,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("BLITZ").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    #[test]
    fn test_shipped_config() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../configs/default.toml")),
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.bridge.status_url, Bridge::default().status_url);
        assert_eq!(settings.bridge.poll_interval(), Duration::from_secs(2));
        assert_eq!(settings.serial.baud_rate, 9600);
        assert_eq!(settings.serial.port_path, None);
        assert_eq!(settings.serial.settle_delay(), Duration::from_millis(500));
    }
}
