use ridetrack_core::{
    parse, sample_records, validate_activity_name, ActivityType, NewActivity, ParsedTrack, RecordError,
};

const RIDE: &str = r#"<gpx><trk><trkseg>
  <trkpt lat="59.0" lon="10.0"><ele>10</ele><time>2024-05-01T08:00:00Z</time></trkpt>
  <trkpt lat="59.001" lon="10.0"><ele>12</ele><time>2024-05-01T08:00:09.600Z</time></trkpt>
</trkseg></trk></gpx>"#;

#[test]
fn name_is_trimmed_and_bounded() {
    assert_eq!(validate_activity_name("  Evening spin  ").unwrap(), "Evening spin");
    assert_eq!(validate_activity_name("   "), Err(RecordError::EmptyName));
    assert_eq!(validate_activity_name(" a "), Err(RecordError::NameTooShort { min: 2 }));
    assert_eq!(validate_activity_name(&"x".repeat(101)), Err(RecordError::NameTooLong { max: 100 }));
    assert!(validate_activity_name(&"x".repeat(100)).is_ok());
}

#[test]
fn activity_type_parsing() {
    assert_eq!("Ride".parse::<ActivityType>().unwrap(), ActivityType::Ride);
    assert_eq!("run".parse::<ActivityType>().unwrap(), ActivityType::Run);
    assert!(matches!("swim".parse::<ActivityType>(), Err(RecordError::UnknownActivityType(_))));
    assert_eq!(serde_json::to_string(&ActivityType::Run).unwrap(), "\"run\"");
}

#[test]
fn new_activity_from_track() {
    let track = parse(RIDE, "gpx").unwrap();
    let a = NewActivity::from_track("Commute", ActivityType::Ride, &track).unwrap();
    assert_eq!(a.title, "Commute");
    assert_eq!(a.duration, 10); // 9.6 s rounded
    assert_eq!(a.elevation_gain, 2.0);
    assert_eq!(a.distance, track.distance);

    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["type"], "ride");
}

#[test]
fn empty_track_is_rejected() {
    let err = NewActivity::from_track("Commute", ActivityType::Run, &ParsedTrack::default()).unwrap_err();
    assert_eq!(err, RecordError::NoActivityData);
}

#[test]
fn sample_records_use_seconds() {
    let track = parse(RIDE, "gpx").unwrap();
    let rows = sample_records("act-42", &track.samples);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.activity_id == "act-42"));
    assert_eq!(rows[0].timestamp, Some(track.samples[0].timestamp.unwrap() as f64 / 1000.0));
    assert!((rows[1].timestamp.unwrap() - rows[0].timestamp.unwrap() - 9.6).abs() < 1e-6);
    assert_eq!(rows[1].elevation, 12.0);
}
