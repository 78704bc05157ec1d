use serde::{Deserialize, Serialize};

use crate::models::Sample;
use crate::types::{Cfg, ChartType};

const MS_TO_KMH: f64 = 3.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Visible map window: centre and span in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl ChartType {
    /// Chart value of one sample; absent fields plot as 0.
    pub fn value(self, s: &Sample) -> f64 {
        match self {
            ChartType::Speed => s.speed * MS_TO_KMH,
            ChartType::HeartRate => s.heart_rate.map_or(0.0, f64::from),
            ChartType::Elevation => s.elevation,
            ChartType::Power => s.power.map_or(0.0, f64::from),
        }
    }
}

/// Every `step`-th sample's value, `step = max(1, len / max_points)`.
/// An empty input gives a single 0 so the chart still has a baseline.
pub fn chart_series(samples: &[Sample], chart: ChartType, max_points: usize) -> Vec<f64> {
    if samples.is_empty() {
        return vec![0.0];
    }
    let step = (samples.len() / max_points.max(1)).max(1);
    samples
        .iter()
        .step_by(step)
        .map(|s| chart.value(s))
        .collect()
}

/// Polylinje av samples med posisjonsfix, i filrekkefølge.
pub fn route(samples: &[Sample]) -> Vec<RoutePoint> {
    samples
        .iter()
        .filter(|s| s.has_fix())
        .map(|s| RoutePoint { latitude: s.latitude, longitude: s.longitude })
        .collect()
}

pub fn map_region(samples: &[Sample], cfg: &Cfg) -> MapRegion {
    let pts = route(samples);
    if pts.is_empty() {
        return MapRegion {
            latitude: 0.0,
            longitude: 0.0,
            latitude_delta: cfg.min_map_delta,
            longitude_delta: cfg.min_map_delta,
        };
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &pts {
        min_lat = min_lat.min(p.latitude);
        max_lat = max_lat.max(p.latitude);
        min_lon = min_lon.min(p.longitude);
        max_lon = max_lon.max(p.longitude);
    }

    MapRegion {
        latitude: (min_lat + max_lat) / 2.0,
        longitude: (min_lon + max_lon) / 2.0,
        latitude_delta: ((max_lat - min_lat) * cfg.map_padding).max(cfg.min_map_delta),
        longitude_delta: ((max_lon - min_lon) * cfg.map_padding).max(cfg.min_map_delta),
    }
}
