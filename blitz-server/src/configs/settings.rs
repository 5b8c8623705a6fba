use std::env;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use blitz_api::models::LoadId;

use crate::configs::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

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
pub struct Models {
    /// Directory holding `load{i}_status.rf`
    pub directory: String,
}

impl Models {
    pub fn path_for(&self, id: LoadId) -> PathBuf {
        PathBuf::from(&self.directory).join(format!("load{}_status.rf", id.number()))
    }
}

impl Default for Models {
    fn default() -> Self {
        Self { directory: "models".to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// $/kWh inside the peak window
    pub peak_rate: f64,
    /// $/kWh outside the peak window
    pub off_peak_rate: f64,
    /// First peak hour, inclusive
    pub peak_start: u8,
    /// Last peak hour, exclusive
    pub peak_end: u8,
    /// Offset of the wall clock used to pick the rate
    pub utc_offset_hours: i8,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            peak_rate: 0.20,
            off_peak_rate: 0.10,
            peak_start: 8,
            peak_end: 20,
            utc_offset_hours: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    pub power_mean: f64,
    pub power_std_dev: f64,
    pub cost_min: f64,
    pub cost_max: f64,
}

impl Default for Mock {
    fn default() -> Self {
        Self {
            power_mean: 500.0,
            power_std_dev: 100.0,
            cost_min: 0.1,
            cost_max: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    /// Span used when the request does not ask for one
    pub hours: u32,
    /// Largest span a request may ask for
    pub max_hours: u32,
}

impl Default for History {
    fn default() -> Self {
        Self { hours: 24, max_hours: 168 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub models: Models,
    pub tariff: Tariff,
    pub mock: Mock,
    pub history: History,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("BLITZ").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.models.directory = normalize_path(&settings.models.directory)
            .map_err(|e| ConfigError::Message(e.to_string()))?
            .to_string_lossy()
            .to_string();

        Ok(settings)
    }
}
