// core/src/records.rs
//
// Shapes handed to the persistence layer after a successful parse. Storage
// itself (auth, upload, inserts) lives outside this crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::models::{ParsedTrack, Sample};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Ride,
    Run,
}

impl FromStr for ActivityType {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ride" => Ok(ActivityType::Ride),
            "run" => Ok(ActivityType::Run),
            other => Err(RecordError::UnknownActivityType(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityType::Ride => "ride",
            ActivityType::Run => "run",
        })
    }
}

/// Trimmed activity name, 2..=100 characters.
pub fn validate_activity_name(name: &str) -> Result<String, RecordError> {
    let name = name.trim();
    let len = name.chars().count();
    if len == 0 {
        return Err(RecordError::EmptyName);
    }
    if len < NAME_MIN_CHARS {
        return Err(RecordError::NameTooShort { min: NAME_MIN_CHARS });
    }
    if len > NAME_MAX_CHARS {
        return Err(RecordError::NameTooLong { max: NAME_MAX_CHARS });
    }
    Ok(name.to_string())
}

/// Aggregate row for a new activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub distance: f64,       // meter
    pub duration: i64,       // hele sekunder
    pub elevation_gain: f64, // meter
}

impl NewActivity {
    /// Validerer tittel og avviser spor uten samples.
    pub fn from_track(title: &str, activity_type: ActivityType, track: &ParsedTrack) -> Result<Self, RecordError> {
        let title = validate_activity_name(title)?;
        if track.is_empty() {
            return Err(RecordError::NoActivityData);
        }
        Ok(Self {
            title,
            activity_type,
            distance: track.distance,
            duration: track.duration.round() as i64,
            elevation_gain: track.elevation_gain,
        })
    }
}

/// Child row per sample, tagged with its activity id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub activity_id: String,
    pub timestamp: Option<f64>, // sekunder siden epoch
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub speed: f64,
    pub heart_rate: Option<u32>,
    pub cadence: Option<u32>,
    pub power: Option<u32>,
}

impl SampleRecord {
    pub fn new(activity_id: &str, s: &Sample) -> Self {
        Self {
            activity_id: activity_id.to_string(),
            timestamp: s.timestamp.map(|ms| ms as f64 / 1000.0),
            latitude: s.latitude,
            longitude: s.longitude,
            elevation: s.elevation,
            speed: s.speed,
            heart_rate: s.heart_rate,
            cadence: s.cadence,
            power: s.power,
        }
    }
}

pub fn sample_records(activity_id: &str, samples: &[Sample]) -> Vec<SampleRecord> {
    samples.iter().map(|s| SampleRecord::new(activity_id, s)).collect()
}
