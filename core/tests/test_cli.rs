use ridetrack_core::cli::{format_distance, format_duration, format_elevation, track_report};
use ridetrack_core::parse;

#[test]
fn formatting() {
    assert_eq!(format_distance(12_346.0), "12.35 km");
    assert_eq!(format_duration(42.0 * 60.0 + 5.0), "42 min");
    assert_eq!(format_duration(3_900.0), "1h 5 min");
    assert_eq!(format_elevation(123.6), "124 m");
}

#[test]
fn report_mentions_totals() {
    let raw = r#"<gpx><trk><trkseg>
      <trkpt lat="0" lon="0"><time>2024-05-01T08:00:00Z</time></trkpt>
      <trkpt lat="0" lon="1"><time>2024-05-01T08:16:40Z</time></trkpt>
    </trkseg></trk></gpx>"#;
    let report = track_report(&parse(raw, "gpx").unwrap());
    assert!(report.contains("Distance:  111.19 km"), "{report}");
    assert!(report.contains("Duration:  16 min"));
    assert!(report.contains("Avg HR:    -"));
    assert!(!report.contains("no timestamp"));
}
