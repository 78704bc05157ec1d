use ridetrack_core::{load_cfg, save_cfg, Cfg, ConfigError};
use std::fs;

#[test]
fn test_save_and_load_cfg() {
    let path = "tests/tmp_cfg_roundtrip.json";
    let _ = fs::remove_file(path);

    let cfg = Cfg {
        max_input_bytes: Some(5_000_000),
        chart_max_points: 60,
        map_padding: 1.5,
        min_map_delta: 0.02,
    };
    save_cfg(&cfg, path).expect("kunne ikke lagre konfig");

    let loaded = load_cfg(path).expect("kunne ikke laste konfig");
    assert_eq!(loaded, cfg);

    fs::remove_file(path).ok();
}

#[test]
fn missing_file_gives_defaults() {
    let cfg = load_cfg("tests/does_not_exist.json").unwrap();
    assert_eq!(cfg, Cfg::default());
}

#[test]
fn parse_error_names_the_field() {
    let path = "tests/tmp_cfg_bad.json";
    fs::write(path, r#"{"chart_max_points": "many"}"#).unwrap();

    match load_cfg(path) {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, "chart_max_points"),
        other => panic!("expected parse error, got {other:?}"),
    }

    fs::remove_file(path).ok();
}
