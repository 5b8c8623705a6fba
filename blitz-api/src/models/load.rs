use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of switched circuits reported by every payload.
pub const LOAD_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadId {
    Load1,
    Load2,
    Load3,
    Load4,
    Load5,
}

impl LoadId {
    pub const ALL: [LoadId; LOAD_COUNT] = [
        LoadId::Load1,
        LoadId::Load2,
        LoadId::Load3,
        LoadId::Load4,
        LoadId::Load5,
    ];

    /// Zero based position of the channel.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One based channel number as it appears in names and file paths.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            LoadId::Load1 => "Load1",
            LoadId::Load2 => "Load2",
            LoadId::Load3 => "Load3",
            LoadId::Load4 => "Load4",
            LoadId::Load5 => "Load5",
        }
    }

    pub fn power_key(self) -> &'static str {
        match self {
            LoadId::Load1 => "Load1_Power",
            LoadId::Load2 => "Load2_Power",
            LoadId::Load3 => "Load3_Power",
            LoadId::Load4 => "Load4_Power",
            LoadId::Load5 => "Load5_Power",
        }
    }

    pub fn status_key(self) -> &'static str {
        match self {
            LoadId::Load1 => "Load1_Status",
            LoadId::Load2 => "Load2_Status",
            LoadId::Load3 => "Load3_Status",
            LoadId::Load4 => "Load4_Status",
            LoadId::Load5 => "Load5_Status",
        }
    }

    fn from_field(key: &str) -> Option<(LoadId, ReadingField)> {
        Self::ALL.into_iter().find_map(|id| {
            if key == id.power_key() {
                Some((id, ReadingField::Power))
            } else if key == id.status_key() {
                Some((id, ReadingField::Status))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadStatus {
    On,
    Off,
}

impl LoadStatus {
    /// Maps a binary classifier output to a label. Only an exact `1` means on.
    pub fn from_prediction(prediction: f64) -> Self {
        if prediction == 1.0 {
            LoadStatus::On
        } else {
            LoadStatus::Off
        }
    }

    /// Parses the wire label. Matching is case sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ON" => Some(LoadStatus::On),
            "OFF" => Some(LoadStatus::Off),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoadStatus::On => "ON",
            LoadStatus::Off => "OFF",
        }
    }

    pub fn is_on(self) -> bool {
        self == LoadStatus::On
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReading {
    /// Synthetic power draw in watts
    pub power: f64,
    /// Classifier label for the channel
    pub status: LoadStatus,
}

/// One reading per channel, always complete.
///
/// On the wire the readings are a flat object keyed by `Load{i}_Power` and
/// `Load{i}_Status`, so they can be flattened into larger records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReadings([LoadReading; LOAD_COUNT]);

impl LoadReadings {
    pub fn new(readings: [LoadReading; LOAD_COUNT]) -> Self {
        Self(readings)
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(LoadId) -> LoadReading,
    {
        Self(LoadId::ALL.map(f))
    }

    pub fn get(&self, id: LoadId) -> &LoadReading {
        &self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LoadId, &LoadReading)> {
        LoadId::ALL.into_iter().zip(self.0.iter())
    }

    pub fn powers(&self) -> [f64; LOAD_COUNT] {
        self.0.map(|reading| reading.power)
    }

    /// Sum of the power drawn by channels labelled on.
    pub fn powered_load(&self) -> f64 {
        self.0
            .iter()
            .filter(|reading| reading.status.is_on())
            .map(|reading| reading.power)
            .sum()
    }
}

impl Serialize for LoadReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LOAD_COUNT * 2))?;
        for (id, reading) in self.iter() {
            map.serialize_entry(id.power_key(), &reading.power)?;
        }
        for (id, reading) in self.iter() {
            map.serialize_entry(id.status_key(), &reading.status)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy)]
enum ReadingField {
    Power,
    Status,
}

struct LoadReadingsVisitor;

impl<'de> Visitor<'de> for LoadReadingsVisitor {
    type Value = LoadReadings;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with Load1_Power..Load5_Power and Load1_Status..Load5_Status")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut powers = [None; LOAD_COUNT];
        let mut statuses = [None; LOAD_COUNT];

        while let Some(key) = access.next_key::<String>()? {
            match LoadId::from_field(&key) {
                Some((id, ReadingField::Power)) => powers[id.index()] = Some(access.next_value::<f64>()?),
                Some((id, ReadingField::Status)) => statuses[id.index()] = Some(access.next_value::<LoadStatus>()?),
                None => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }

        let mut readings = [LoadReading { power: 0.0, status: LoadStatus::Off }; LOAD_COUNT];
        for id in LoadId::ALL {
            readings[id.index()] = LoadReading {
                power: powers[id.index()].ok_or_else(|| de::Error::missing_field(id.power_key()))?,
                status: statuses[id.index()].ok_or_else(|| de::Error::missing_field(id.status_key()))?,
            };
        }

        Ok(LoadReadings(readings))
    }
}

impl<'de> Deserialize<'de> for LoadReadings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LoadReadingsVisitor)
    }
}
