use std::fmt::Write;

use crate::models::ParsedTrack;
use crate::types::ActivityStats;

/// "12.35 km"
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// "1h 5 min" or "42 min"
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes} min")
    } else {
        format!("{minutes} min")
    }
}

pub fn format_elevation(meters: f64) -> String {
    format!("{} m", meters.round() as i64)
}

fn opt(v: Option<f64>, unit: &str) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.1} {unit}"))
}

pub fn track_report(track: &ParsedTrack) -> String {
    let stats = ActivityStats::from_samples(&track.samples);
    let mut out = String::new();

    let _ = writeln!(out, "--- Track Report ---");
    let _ = writeln!(out, "Samples:   {}", track.samples.len());
    let _ = writeln!(out, "Distance:  {}", format_distance(track.distance));
    let _ = writeln!(out, "Duration:  {}", format_duration(track.duration));
    let _ = writeln!(out, "Elevation: {}", format_elevation(track.elevation_gain));
    let _ = writeln!(out, "Avg speed: {}", opt(stats.average_speed.map(|v| v * 3.6), "km/h"));
    let _ = writeln!(out, "Max speed: {}", opt(stats.max_speed.map(|v| v * 3.6), "km/h"));
    let _ = writeln!(out, "Avg HR:    {}", opt(stats.average_heart_rate, "bpm"));
    let _ = writeln!(out, "Avg power: {}", opt(stats.average_power, "W"));
    if track.untimed {
        let _ = writeln!(out, "(some points have no timestamp)");
    }
    out
}

pub fn print_track_report(track: &ParsedTrack) {
    print!("{}", track_report(track));
}
