use ridetrack_core::metrics::{avg_hr, avg_speed, max_hr, max_speed};
use ridetrack_core::{parse_observed, ActivityStats, Metrics, Sample};

fn sample(speed: f64, hr: Option<u32>, cad: Option<u32>, power: Option<u32>) -> Sample {
    Sample { speed, heart_rate: hr, cadence: cad, power, ..Default::default() }
}

#[test]
fn stats_over_present_values_only() {
    let samples = vec![
        sample(0.0, Some(120), None, None),
        sample(4.0, Some(140), Some(80), Some(200)),
        sample(6.0, None, Some(90), Some(300)),
    ];
    let stats = ActivityStats::from_samples(&samples);

    assert_eq!(stats.average_speed, Some(5.0)); // first sample excluded
    assert_eq!(stats.max_speed, Some(6.0));
    assert_eq!(stats.average_heart_rate, Some(130.0));
    assert_eq!(stats.max_heart_rate, Some(140));
    assert_eq!(stats.average_cadence, Some(85.0));
    assert_eq!(stats.average_power, Some(250.0));
}

#[test]
fn stats_without_sensor_data() {
    let samples = vec![sample(0.0, None, None, None), sample(3.0, None, None, None)];
    let stats = ActivityStats::from_samples(&samples);
    assert_eq!(stats.average_heart_rate, None);
    assert_eq!(stats.max_heart_rate, None);
    assert_eq!(stats.average_cadence, None);
    assert_eq!(stats.average_power, None);
}

#[test]
fn empty_and_single_sample() {
    assert_eq!(ActivityStats::from_samples(&[]), ActivityStats::default());
    let one = [sample(0.0, Some(99), None, None)];
    assert_eq!(avg_speed(&one), None);
    assert_eq!(max_speed(&one), Some(0.0));
    assert_eq!(avg_hr(&one), Some(99.0));
    assert_eq!(max_hr(&one), Some(99));
}

#[test]
fn observed_parse_counts_outcomes() {
    let metrics = Metrics::new().unwrap();
    let ok = r#"<gpx><trk><trkseg><trkpt lat="1" lon="1"/><trkpt lat="1" lon="2"/></trkseg></trk></gpx>"#;

    assert!(parse_observed(ok, "gpx", &metrics).is_ok());
    assert!(parse_observed("<gpx/>", "gpx", &metrics).is_ok());
    assert!(parse_observed("nope", "gpx", &metrics).is_err());
    assert!(parse_observed(ok, "ride.fit", &metrics).is_err());

    assert_eq!(metrics.parse_count("ok"), 1);
    assert_eq!(metrics.parse_count("empty"), 1);
    assert_eq!(metrics.parse_count("malformed"), 1);
    assert_eq!(metrics.parse_count("unsupported"), 1);
    assert_eq!(metrics.track_points(), 2);
}
