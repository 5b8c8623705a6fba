use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use blitz_api::models::{LOAD_COUNT, LoadId, LoadStatus};

/// The part of the status payload the bridge reads. Everything else is
/// ignored and a missing `status` object counts as all loads off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub status: HashMap<String, Value>,
}

/// One ASCII digit per load, `1` for on, in channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern([bool; LOAD_COUNT]);

impl Pattern {
    pub fn new(bits: [bool; LOAD_COUNT]) -> Self {
        Self(bits)
    }

    /// Only the exact label `ON` switches a load on.
    pub fn from_snapshot(snapshot: &StatusSnapshot) -> Self {
        Self(LoadId::ALL.map(|id| {
            snapshot
                .status
                .get(id.name())
                .and_then(Value::as_str)
                .and_then(LoadStatus::from_label)
                .is_some_and(LoadStatus::is_on)
        }))
    }

    pub fn as_bytes(&self) -> [u8; LOAD_COUNT] {
        self.0.map(|on| if on { b'1' } else { b'0' })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{}", byte as char)?;
        }
        Ok(())
    }
}
