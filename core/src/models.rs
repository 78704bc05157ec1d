use serde::{Deserialize, Serialize};

use crate::geo::has_fix;

/// One recorded instant of a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Sample {
    pub timestamp: Option<i64>,  // ms siden epoch, None = punkt uten <time>
    pub latitude: f64,           // grader
    pub longitude: f64,          // grader
    pub elevation: f64,          // meter, 0 hvis mangler
    pub speed: f64,              // m/s, avledet; 0 for første sample
    pub heart_rate: Option<u32>, // bpm
    pub cadence: Option<u32>,    // rpm
    pub power: Option<u32>,      // watt
}

impl Sample {
    pub fn has_fix(&self) -> bool {
        has_fix(self.latitude, self.longitude)
    }
}

/// Resultat av å lese inn én sporfil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParsedTrack {
    pub distance: f64,       // meter
    pub duration: f64,       // sekunder
    pub elevation_gain: f64, // meter, kun stigning teller
    pub samples: Vec<Sample>,
    /// True when at least one sample has no time element; speed and duration
    /// are then only partially (or not at all) derived.
    #[serde(default)]
    pub untimed: bool,
}

impl ParsedTrack {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
