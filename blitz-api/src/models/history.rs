use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::LoadReadings;

/// A fabricated hourly sample. Records are generated on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Sample time, RFC 3339
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Energy cost for the hour
    pub cost: f64,
    /// Channel readings flattened into the record
    #[serde(flatten)]
    pub readings: LoadReadings,
}
