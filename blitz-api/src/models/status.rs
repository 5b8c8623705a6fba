use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{LoadId, LoadReadings, LoadStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Classifier label per channel, keyed by `Load{i}`
    pub status: BTreeMap<LoadId, LoadStatus>,
    /// Power draw and label per channel
    pub power: LoadReadings,
    /// Energy cost of the powered channels
    pub cost: f64,
}

impl StatusResponse {
    pub fn new(readings: LoadReadings, cost: f64) -> Self {
        Self {
            status: readings.iter().map(|(id, reading)| (id, reading.status)).collect(),
            power: readings,
            cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the server answers
    pub status: String,
    /// Number of loaded classifiers
    pub models: usize,
}
