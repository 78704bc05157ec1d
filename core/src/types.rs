use serde::{Deserialize, Serialize};

/// Track file format, chosen from a file name or bare extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFormat {
    Gpx,
    /// Binary format, recognised but without a grammar.
    Fit,
    Other(String),
}

impl TrackFormat {
    /// `"ride.GPX"`, `".gpx"` and `"gpx"` all select `Gpx`.
    pub fn from_hint(hint: &str) -> Self {
        let ext = hint.rsplit('.').next().unwrap_or("").trim().to_lowercase();
        match ext.as_str() {
            "gpx" => TrackFormat::Gpx,
            "fit" => TrackFormat::Fit,
            _ => TrackFormat::Other(ext),
        }
    }

    pub fn extension(&self) -> &str {
        match self {
            TrackFormat::Gpx => "gpx",
            TrackFormat::Fit => "fit",
            TrackFormat::Other(ext) => ext,
        }
    }
}

/// Runtime configuration. Every field has a default so partial JSON files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cfg {
    /// Reject inputs longer than this many bytes (None = no limit).
    pub max_input_bytes: Option<usize>,
    pub chart_max_points: usize,
    pub map_padding: f64,   // faktor på bounding box-spennet
    pub min_map_delta: f64, // grader
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            chart_max_points: 100,
            map_padding: 1.3,
            min_map_delta: 0.01,
        }
    }
}

/// Selectable chart series on the activity detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Speed,
    HeartRate,
    Elevation,
    Power,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Speed,
        ChartType::HeartRate,
        ChartType::Elevation,
        ChartType::Power,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Speed => "Speed (km/h)",
            ChartType::HeartRate => "Heart Rate (bpm)",
            ChartType::Elevation => "Elevation (m)",
            ChartType::Power => "Power (W)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActivityStats {
    pub average_speed: Option<f64>, // m/s
    pub max_speed: Option<f64>,     // m/s
    pub average_heart_rate: Option<f64>,
    pub max_heart_rate: Option<u32>,
    pub average_cadence: Option<f64>,
    pub average_power: Option<f64>,
}
