// core/src/parser.rs
use log::{debug, info, warn};

use crate::counters::Metrics;
use crate::error::{TrackError, TrackResult};
use crate::geo::haversine_m;
use crate::gpx::{scan_track_points, TrackPoint};
use crate::models::{ParsedTrack, Sample};
use crate::types::{Cfg, TrackFormat};

/// Parse raw track-file text. `format_hint` is a file name or bare extension.
///
/// Pure: no I/O and no shared state, safe to call from any thread.
pub fn parse(raw: &str, format_hint: &str) -> TrackResult<ParsedTrack> {
    parse_with(raw, format_hint, &Cfg::default())
}

pub fn parse_with(raw: &str, format_hint: &str, cfg: &Cfg) -> TrackResult<ParsedTrack> {
    if let Some(limit) = cfg.max_input_bytes {
        if raw.len() > limit {
            return Err(TrackError::InputTooLarge { size: raw.len(), limit });
        }
    }

    match TrackFormat::from_hint(format_hint) {
        TrackFormat::Gpx => parse_gpx(raw),
        format => {
            warn!("parse: no grammar for format '{}'", format.extension());
            Err(TrackError::UnsupportedFormat(format.extension().to_string()))
        }
    }
}

pub fn parse_gpx(raw: &str) -> TrackResult<ParsedTrack> {
    let points = scan_track_points(raw)?;
    let mut acc = TrackAccumulator::with_capacity(points.len());
    for p in points {
        acc.push(p);
    }
    let track = acc.finish();
    debug!(
        "parse_gpx: {} samples, {:.1} m, {:.0} s, +{:.1} m",
        track.samples.len(),
        track.distance,
        track.duration,
        track.elevation_gain
    );
    Ok(track)
}

/// `parse` plus outcome bookkeeping in caller-owned counters.
pub fn parse_observed(raw: &str, format_hint: &str, metrics: &Metrics) -> TrackResult<ParsedTrack> {
    let result = parse(raw, format_hint);
    match &result {
        Ok(track) => {
            let outcome = if track.is_empty() { "empty" } else { "ok" };
            metrics.record_parse(outcome, track.samples.len());
        }
        Err(e) => {
            info!("parse failed for '{}': {}", format_hint, e);
            metrics.record_parse(e.kind(), 0);
        }
    }
    result
}

/// Posisjon/høyde/tid for forrige punkt.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    lat: f64,
    lon: f64,
    ele: f64,
    time_ms: Option<i64>,
}

/// Løpende summer over track-punkter i filrekkefølge.
#[derive(Debug, Default)]
pub struct TrackAccumulator {
    distance: f64,
    elevation_gain: f64,
    prev: Option<Cursor>,
    samples: Vec<Sample>,
}

impl TrackAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { samples: Vec::with_capacity(n), ..Self::default() }
    }

    pub fn push(&mut self, p: TrackPoint) {
        let ele = p.ele.unwrap_or(0.0);
        let mut speed = 0.0;

        if let Some(prev) = self.prev {
            let segment = haversine_m(prev.lat, prev.lon, p.lat, p.lon);
            self.distance += segment;

            // bare stigning teller
            let d_ele = ele - prev.ele;
            if d_ele > 0.0 {
                self.elevation_gain += d_ele;
            }

            if let (Some(t0), Some(t1)) = (prev.time_ms, p.time_ms) {
                let dt = (t1 - t0) as f64 / 1000.0;
                if dt > 0.0 {
                    speed = segment / dt;
                }
            }
        }

        self.samples.push(Sample {
            timestamp: p.time_ms,
            latitude: p.lat,
            longitude: p.lon,
            elevation: ele,
            speed,
            heart_rate: p.hr,
            cadence: p.cad,
            power: p.power,
        });

        self.prev = Some(Cursor { lat: p.lat, lon: p.lon, ele, time_ms: p.time_ms });
    }

    pub fn finish(self) -> ParsedTrack {
        let untimed = self.samples.iter().any(|s| s.timestamp.is_none());

        let duration = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) if self.samples.len() >= 2 => match (first.timestamp, last.timestamp) {
                (Some(t0), Some(t1)) => ((t1 - t0) as f64 / 1000.0).max(0.0),
                _ => 0.0,
            },
            _ => 0.0,
        };

        if untimed && !self.samples.is_empty() {
            warn!("track has points without <time>; speed/duration are incomplete");
        }

        ParsedTrack {
            distance: self.distance,
            duration,
            elevation_gain: self.elevation_gain,
            samples: self.samples,
            untimed,
        }
    }
}
